//! Cell address type and the column-letter codec

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AA10")
///
/// Columns are letters in bijective base-26 (A-Z, then AA, AB, ...), rows are
/// numbers starting at 1. Both are stored 0-based. Addresses order column-major,
/// which is also the order ranges expand in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Column index (0-based, A=0, B=1, ..., AA=26)
    pub col: u32,
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// The address must be one or more uppercase letters immediately followed
    /// by a row number without leading zeros. Nothing else is tolerated, not
    /// even surrounding whitespace. Columns past `XFD` and rows past
    /// [`MAX_ROWS`] are out of the sheet.
    ///
    /// # Examples
    /// ```
    /// use sheetcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B12").unwrap();
    /// assert_eq!(addr.col, 1);
    /// assert_eq!(addr.row, 11);
    ///
    /// assert!(CellAddress::parse("A1B").is_err());
    /// assert!(CellAddress::parse("A01").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_address("empty address"));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_uppercase() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::invalid_address(s));
        }

        let col = Self::column_to_index(&s[..pos]).map_err(|_| Error::invalid_address(s))?;

        // Row: a non-empty run of digits, no leading zero, nothing after it
        let row_str = &s[pos..];
        if row_str.is_empty()
            || row_str.starts_with('0')
            || !row_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::invalid_address(s));
        }

        let row: u32 = row_str.parse().map_err(|_| Error::invalid_address(s))?;

        if col >= MAX_COLS || row > MAX_ROWS {
            return Err(Error::invalid_address(s));
        }

        Ok(Self { col, row: row - 1 })
    }

    /// Check whether `s` is a well-formed address
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Convert column letters to an index (A = 0, Z = 25, AA = 26, etc.)
    pub fn column_to_index(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::invalid_address("empty column letters"));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_uppercase() {
                return Err(Error::invalid_address(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(c as u32 - 'A' as u32 + 1))
                .ok_or_else(|| Error::invalid_address(format!("column too large: {}", letters)))?;
        }

        Ok(col - 1)
    }

    /// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn index_to_column(index: u32) -> String {
        let mut letters = Vec::new();
        let mut n = index as u64 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            letters.push((n % 26) as u8 + b'A');
            n /= 26;
        }

        letters.iter().rev().map(|&b| b as char).collect()
    }

    /// Row number as displayed (1-based)
    pub fn row_number(&self) -> u32 {
        self.row + 1
    }

    /// Column letters of this address
    pub fn column_letters(&self) -> String {
        Self::index_to_column(self.col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", self.column_letters(), self.row_number())
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellAddress {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_index_to_column() {
        assert_eq!(CellAddress::index_to_column(0), "A");
        assert_eq!(CellAddress::index_to_column(1), "B");
        assert_eq!(CellAddress::index_to_column(25), "Z");
        assert_eq!(CellAddress::index_to_column(26), "AA");
        assert_eq!(CellAddress::index_to_column(27), "AB");
        assert_eq!(CellAddress::index_to_column(51), "AZ");
        assert_eq!(CellAddress::index_to_column(52), "BA");
        assert_eq!(CellAddress::index_to_column(701), "ZZ");
        assert_eq!(CellAddress::index_to_column(702), "AAA");
        assert_eq!(CellAddress::index_to_column(18277), "ZZZ");
    }

    #[test]
    fn test_column_to_index() {
        assert_eq!(CellAddress::column_to_index("A").unwrap(), 0);
        assert_eq!(CellAddress::column_to_index("Z").unwrap(), 25);
        assert_eq!(CellAddress::column_to_index("AA").unwrap(), 26);
        assert_eq!(CellAddress::column_to_index("ZZ").unwrap(), 701);
        assert_eq!(CellAddress::column_to_index("AAA").unwrap(), 702);

        assert!(CellAddress::column_to_index("").is_err());
        assert!(CellAddress::column_to_index("a").is_err());
        assert!(CellAddress::column_to_index("A1").is_err());
        assert!(CellAddress::column_to_index(&"Z".repeat(20)).is_err());
    }

    #[test]
    fn test_column_round_trip() {
        for i in 0..=18277 {
            let letters = CellAddress::index_to_column(i);
            assert_eq!(CellAddress::column_to_index(&letters).unwrap(), i);
        }
    }

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr, CellAddress::new(0, 0));

        let addr = CellAddress::parse("AZ10").unwrap();
        assert_eq!(addr.col, 51);
        assert_eq!(addr.row, 9);
        assert_eq!(addr.row_number(), 10);
    }

    #[test]
    fn test_is_valid() {
        assert!(CellAddress::is_valid("A1"));
        assert!(CellAddress::is_valid("B2"));
        assert!(CellAddress::is_valid("AZ10"));

        assert!(!CellAddress::is_valid(""));
        assert!(!CellAddress::is_valid("1A"));
        assert!(!CellAddress::is_valid("a10"));
        assert!(!CellAddress::is_valid("A 1"));
        assert!(!CellAddress::is_valid("A-1"));
        assert!(!CellAddress::is_valid("A1B"));
        assert!(!CellAddress::is_valid("A0"));
        assert!(!CellAddress::is_valid("A01"));
        assert!(!CellAddress::is_valid("A"));
        assert!(!CellAddress::is_valid("12"));
        assert!(!CellAddress::is_valid(" A1"));
        assert!(!CellAddress::is_valid("A99999999999"));
    }

    #[test]
    fn test_sheet_bounds() {
        assert_eq!(
            CellAddress::parse("XFD1048576").unwrap(),
            CellAddress::new(MAX_COLS - 1, MAX_ROWS - 1)
        );
        assert!(!CellAddress::is_valid("XFE1"));
        assert!(!CellAddress::is_valid("ZZZ1"));
        assert!(!CellAddress::is_valid("A1048577"));
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(2, 99).to_string(), "C100");
        assert_eq!("AB7".parse::<CellAddress>().unwrap().to_string(), "AB7");
    }

    #[test]
    fn test_ordering_is_column_major() {
        let a2 = CellAddress::parse("A2").unwrap();
        let b1 = CellAddress::parse("B1").unwrap();
        assert!(a2 < b1);
    }

    proptest! {
        #[test]
        fn display_parse_round_trip(col in 0u32..MAX_COLS, row in 0u32..MAX_ROWS) {
            let addr = CellAddress::new(col, row);
            prop_assert_eq!(CellAddress::parse(&addr.to_string()).unwrap(), addr);
        }
    }
}
