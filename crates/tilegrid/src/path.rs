//! Path primitives for tile outlines.
//!
//! A path is a sequence of drawing commands that define a shape. The
//! commands are renderer-agnostic; a host can map them directly onto SVG
//! path data or canvas calls.

use glam::Vec2;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(Vec2),
    /// Draw a line to a position.
    LineTo(Vec2),
    /// Draw an arc.
    ArcTo {
        /// Radii of the ellipse
        radii: Vec2,
        /// X-axis rotation in radians
        x_rotation: f32,
        /// Use large arc
        large_arc: bool,
        /// Sweep direction (clockwise if true)
        sweep: bool,
        /// End point
        to: Vec2,
    },
    /// Close the current sub-path by drawing a line to the start.
    Close,
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Get the bounding box of the path.
    ///
    /// Returns (min, max) corners.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        if self.commands.is_empty() {
            return None;
        }

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut current = Vec2::ZERO;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                    current = *to;
                }
                PathCommand::ArcTo { to, radii, .. } => {
                    // Conservative bounds: include endpoint and radii
                    min = min.min(*to).min(current - *radii);
                    max = max.max(*to).max(current + *radii);
                    current = *to;
                }
                PathCommand::Close => {}
            }
        }

        if min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Draw an arc.
    pub fn arc_to(
        &mut self,
        radii: Vec2,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
        to: Vec2,
    ) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radii,
            x_rotation,
            large_arc,
            sweep,
            to,
        });
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Add a rectangle to the path.
    pub fn rect(&mut self, position: Vec2, size: Vec2) -> &mut Self {
        self.move_to(position);
        self.line_to(position + Vec2::new(size.x, 0.0));
        self.line_to(position + size);
        self.line_to(position + Vec2::new(0.0, size.y));
        self.close()
    }

    /// Add a circle to the path.
    pub fn circle(&mut self, center: Vec2, radius: f32) -> &mut Self {
        let r = Vec2::splat(radius);

        // Start at rightmost point
        self.move_to(center + Vec2::new(radius, 0.0));

        // Draw four arcs
        self.arc_to(r, 0.0, false, true, center + Vec2::new(0.0, radius));
        self.arc_to(r, 0.0, false, true, center + Vec2::new(-radius, 0.0));
        self.arc_to(r, 0.0, false, true, center + Vec2::new(0.0, -radius));
        self.arc_to(r, 0.0, false, true, center + Vec2::new(radius, 0.0));

        self.close()
    }

    /// Add a polygon to the path.
    pub fn polygon(&mut self, points: &[Vec2]) -> &mut Self {
        if points.is_empty() {
            return self;
        }

        self.move_to(points[0]);
        for point in &points[1..] {
            self.line_to(*point);
        }
        self.close()
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}
