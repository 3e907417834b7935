// Fri Oct 16 2026 - Alex

use crate::patch::ResolutionError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
}

impl Resolution {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Validates caller integers; both sides must fit a non-zero `u16`.
    pub fn checked(width: i64, height: i64) -> Result<Self, ResolutionError> {
        Ok(Self {
            width: check_dimension("Width", width)?,
            height: check_dimension("Height", height)?,
        })
    }

    pub fn from_le_fields(width: [u8; 2], height: [u8; 2]) -> Self {
        Self {
            width: u16::from_le_bytes(width),
            height: u16::from_le_bytes(height),
        }
    }
}

fn check_dimension(field: &'static str, value: i64) -> Result<u16, ResolutionError> {
    match u16::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ResolutionError::OutOfRange { field, value }),
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(|| ResolutionError::Format(s.to_string()))?;
        let width = w.trim().parse::<i64>().map_err(|_| ResolutionError::Format(s.to_string()))?;
        let height = h.trim().parse::<i64>().map_err(|_| ResolutionError::Format(s.to_string()))?;
        Self::checked(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accepts_u16_range() {
        assert_eq!(Resolution::checked(1920, 1080).unwrap(), Resolution::new(1920, 1080));
        assert_eq!(Resolution::checked(65535, 1).unwrap(), Resolution::new(65535, 1));
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert_eq!(
            Resolution::checked(65536, 600).unwrap_err(),
            ResolutionError::OutOfRange { field: "Width", value: 65536 }
        );
        assert_eq!(
            Resolution::checked(800, -1).unwrap_err(),
            ResolutionError::OutOfRange { field: "Height", value: -1 }
        );
        assert!(Resolution::checked(0, 600).is_err());
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("1920x1080".parse::<Resolution>().unwrap(), Resolution::new(1920, 1080));
        assert_eq!(" 800 X 600 ".parse::<Resolution>().unwrap(), Resolution::new(800, 600));
        assert!("1920".parse::<Resolution>().is_err());
        assert!("axb".parse::<Resolution>().is_err());
        assert!("70000x600".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_from_le_fields() {
        let res = Resolution::from_le_fields([0x20, 0x03], [0x58, 0x02]);
        assert_eq!(res, Resolution::new(800, 600));
        assert_eq!(res.to_string(), "800x600");
    }
}
