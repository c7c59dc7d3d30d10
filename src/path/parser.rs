use crate::errors::{Error, Result};
use crate::geometry::{pt, Point};

use super::syntax::PathSyntax;
use super::Segment;

/// Converts SVG path data into absolute `Segment` values.
pub struct PathParser {
    tokens: PathSyntax,
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // current command being processed; most commands take multiple parameter
    // sets without repeating the command character
    command: Option<char>,
    // previous second control point (if any) for evaluating 'S' and 's'
    cubic_cp2: Option<Point>,
    // previous control point (if any) for evaluating 'T' and 't'
    quadratic_cp: Option<Point>,
    segments: Vec<Segment>,
}

impl PathParser {
    pub fn new(data: &str) -> Self {
        Self {
            tokens: PathSyntax::new(data),
            position: pt(0., 0.),
            subpath_start: pt(0., 0.),
            command: None,
            cubic_cp2: None,
            quadratic_cp: None,
            segments: Vec::new(),
        }
    }

    fn push(&mut self, segment: Segment) {
        self.position = segment.end();
        self.segments.push(segment);
    }

    /// Resolve a coordinate pair relative to the current position if the
    /// command is lower-case.
    fn coord(&mut self, relative: bool) -> Result<Point> {
        let p = self.tokens.read_coord()?;
        Ok(if relative { self.position + p } else { p })
    }

    fn process_instruction(&mut self) -> Result<()> {
        if self.command.is_none() || self.tokens.at_command()? {
            // "The command letter can be eliminated on subsequent commands if the same
            // command is used multiple times in a row"
            self.command = Some(self.tokens.read_command()?);
        } else {
            // "If a moveto is followed by multiple pairs of coordinates,
            // the subsequent pairs are treated as implicit lineto commands."
            match self.command {
                Some('m') => self.command = Some('l'),
                Some('M') => self.command = Some('L'),
                _ => {}
            }
        }

        let command = self
            .command
            .ok_or_else(|| Error::MalformedInput("path data: missing command".to_string()))?;
        let relative = command.is_ascii_lowercase();
        let start = self.position;

        let mut cubic_cp2 = None;
        let mut quadratic_cp = None;

        match command.to_ascii_uppercase() {
            'M' => {
                // "(x y)+"
                let end = self.coord(relative)?;
                self.subpath_start = end;
                self.push(Segment::Move { start: end, end });
            }
            'L' => {
                let end = self.coord(relative)?;
                self.push(Segment::Line { start, end });
            }
            'H' => {
                // "x+"
                let x = self.tokens.read_number()?;
                let x = if relative { start.re + x } else { x };
                self.push(Segment::Line {
                    start,
                    end: pt(x, start.im),
                });
            }
            'V' => {
                // "y+"
                let y = self.tokens.read_number()?;
                let y = if relative { start.im + y } else { y };
                self.push(Segment::Line {
                    start,
                    end: pt(start.re, y),
                });
            }
            'Z' => {
                let end = self.subpath_start;
                self.push(Segment::Close { start, end });
                // since this doesn't consume further tokens, we must clear the command
                // to force getting a new command token, or we could loop forever
                self.command = None;
            }
            'C' => {
                // (x1 y1 x2 y2 x y)+
                let control1 = self.coord(relative)?;
                let control2 = self.coord(relative)?;
                let end = self.coord(relative)?;
                cubic_cp2 = Some(control2);
                self.push(Segment::CubicBezier {
                    start,
                    control1,
                    control2,
                    end,
                });
            }
            'S' => {
                // "(x2 y2 x y)+"
                let control2 = self.coord(relative)?;
                let end = self.coord(relative)?;
                // "The first control point is assumed to be the reflection of the second
                //  control point on the previous command relative to the current point."
                let control1 = self.cubic_cp2.map_or(start, |prev| start * 2. - prev);
                cubic_cp2 = Some(control2);
                self.push(Segment::CubicBezier {
                    start,
                    control1,
                    control2,
                    end,
                });
            }
            'Q' => {
                // "(x1 y1 x y)+"
                let control = self.coord(relative)?;
                let end = self.coord(relative)?;
                quadratic_cp = Some(control);
                self.push(Segment::QuadraticBezier {
                    start,
                    control,
                    end,
                });
            }
            'T' => {
                // "(x y)+"
                let end = self.coord(relative)?;
                let control = self.quadratic_cp.map_or(start, |prev| start * 2. - prev);
                quadratic_cp = Some(control);
                self.push(Segment::QuadraticBezier {
                    start,
                    control,
                    end,
                });
            }
            'A' => {
                // "(rx ry x-axis-rotation large-arc-flag sweep-flag x y)+"
                let rx = self.tokens.read_non_negative()?;
                let ry = self.tokens.read_non_negative()?;
                let rotation = self.tokens.read_number()?;
                let large_arc = self.tokens.read_flag()?;
                let sweep = self.tokens.read_flag()?;
                let end = self.coord(relative)?;
                self.push(Segment::Arc {
                    start,
                    radius: pt(rx, ry),
                    rotation,
                    large_arc,
                    sweep,
                    end,
                });
            }
            other => {
                return Err(Error::MalformedInput(format!(
                    "path data: invalid command '{other}'"
                )))
            }
        }
        self.cubic_cp2 = cubic_cp2;
        self.quadratic_cp = quadratic_cp;
        Ok(())
    }

    fn evaluate(&mut self) -> Result<()> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            self.process_instruction()?;
        }
        Ok(())
    }

    pub fn parse(mut self) -> Result<Vec<Segment>> {
        self.evaluate()?;
        if let Some(first) = self.segments.first() {
            if !first.is_move() {
                return Err(Error::MalformedInput(
                    "path data must begin with a moveto".to_string(),
                ));
            }
        }
        Ok(self.segments)
    }
}
