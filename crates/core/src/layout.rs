//! Axis-ordering layout descriptors.
//!
//! A layout names the semantic meaning of each tensor axis, e.g. `NCHW`
//! for batch/channel/height/width. The grammar accepted here follows the
//! native library's descriptor strings:
//!
//! - each ASCII letter names one axis (stored uppercase, so `nchw` and
//!   `NCHW` are the same layout)
//! - `?` marks an axis with no name
//! - `...` marks a run of unnamed axes and may appear at most once
//! - axis names must be unique
//! - the empty string is the empty layout (no axis information)

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// One slot in a layout descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Named axis, uppercase ASCII letter
    Named(char),
    /// Unnamed axis (`?`)
    Unnamed,
    /// Run of zero or more unnamed axes (`...`)
    Ellipsis,
}

/// Parsed axis-ordering descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    axes: Vec<Axis>,
}

impl Layout {
    /// Parse a descriptor string.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut axes = Vec::new();
        let mut seen_ellipsis = false;
        let bytes = text.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'.' => {
                    if bytes.len() < i + 3 || bytes[i + 1] != b'.' || bytes[i + 2] != b'.' {
                        return Err(LayoutError::new(text, "stray '.'; expected \"...\""));
                    }
                    if seen_ellipsis {
                        return Err(LayoutError::new(text, "more than one \"...\""));
                    }
                    seen_ellipsis = true;
                    axes.push(Axis::Ellipsis);
                    i += 3;
                }
                b'?' => {
                    axes.push(Axis::Unnamed);
                    i += 1;
                }
                c if c.is_ascii_alphabetic() => {
                    let name = (c as char).to_ascii_uppercase();
                    if axes.contains(&Axis::Named(name)) {
                        return Err(LayoutError::new(
                            text,
                            format!("duplicate axis name '{}'", name),
                        ));
                    }
                    axes.push(Axis::Named(name));
                    i += 1;
                }
                c => {
                    return Err(LayoutError::new(
                        text,
                        format!("unexpected character '{}'", c as char),
                    ));
                }
            }
        }

        Ok(Self { axes })
    }

    /// The parsed axes in order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// True for the empty layout (no axis information).
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for axis in &self.axes {
            match axis {
                Axis::Named(c) => write!(f, "{}", c)?,
                Axis::Unnamed => write!(f, "?")?,
                Axis::Ellipsis => write!(f, "...")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nchw() {
        let l = Layout::parse("NCHW").unwrap();
        assert_eq!(
            l.axes(),
            &[
                Axis::Named('N'),
                Axis::Named('C'),
                Axis::Named('H'),
                Axis::Named('W')
            ]
        );
        assert_eq!(l.to_string(), "NCHW");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Layout::parse("nhwc").unwrap(), Layout::parse("NHWC").unwrap());
    }

    #[test]
    fn test_parse_unnamed_axis() {
        let l = Layout::parse("N?HW").unwrap();
        assert_eq!(l.axes()[1], Axis::Unnamed);
    }

    #[test]
    fn test_parse_ellipsis() {
        let l = Layout::parse("N...C").unwrap();
        assert_eq!(
            l.axes(),
            &[Axis::Named('N'), Axis::Ellipsis, Axis::Named('C')]
        );
        assert_eq!(l.to_string(), "N...C");
    }

    #[test]
    fn test_empty_layout_is_valid() {
        let l = Layout::parse("").unwrap();
        assert!(l.is_empty());
    }

    #[test]
    fn test_duplicate_axis_rejected() {
        let err = Layout::parse("NCN").unwrap_err();
        assert!(err.reason.contains("duplicate"));
    }

    #[test]
    fn test_second_ellipsis_rejected() {
        assert!(Layout::parse("N...C...").is_err());
    }

    #[test]
    fn test_stray_dot_rejected() {
        assert!(Layout::parse("N.C").is_err());
        assert!(Layout::parse("N..").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(Layout::parse("N C").is_err());
        assert!(Layout::parse("N,C").is_err());
        assert!(Layout::parse("N1").is_err());
    }
}
