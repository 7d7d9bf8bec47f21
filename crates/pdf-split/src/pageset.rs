//! Page-selection grammar
//!
//! `PAGESET := PAGE (',' PAGE)*`
//! `PAGE := NUMBER ('-' NUMBER)?`
//!
//! Page numbers are 1-based. Parsing is strict: empty elements and
//! non-numeric text are rejected rather than skipped; surrounding ASCII
//! whitespace per element is tolerated.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::types::{Result, SplitError};

/// One contiguous 1-based page range, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

/// A parsed page selection such as `1,3-5,8`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    ranges: Vec<PageRange>,
}

impl PageSet {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(SplitError::EmptySelection);
        }

        let mut ranges = Vec::new();
        for element in input.split(',') {
            let element = element.trim();
            if element.is_empty() {
                return Err(SplitError::InvalidSelection(format!(
                    "empty element in \"{}\"",
                    input.trim()
                )));
            }
            ranges.push(parse_element(element)?);
        }

        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[PageRange] {
        &self.ranges
    }

    /// Highest page number mentioned in the selection
    pub fn max_page(&self) -> u32 {
        self.ranges.iter().map(|r| r.end).max().unwrap_or(0)
    }

    /// Expand to ascending unique page numbers, validated against
    /// `page_count`. Duplicate and overlapping selections collapse.
    pub fn pages(&self, page_count: u32) -> Result<Vec<u32>> {
        let mut pages = BTreeSet::new();
        for range in &self.ranges {
            if range.end > page_count {
                return Err(SplitError::PageOutOfRange {
                    page: range.end,
                    page_count,
                });
            }
            for page in range.start..=range.end {
                pages.insert(page);
            }
        }
        Ok(pages.into_iter().collect())
    }
}

impl FromStr for PageSet {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_element(element: &str) -> Result<PageRange> {
    let (start, end) = match element.split_once('-') {
        Some((start, end)) => (parse_number(start)?, parse_number(end)?),
        None => {
            let page = parse_number(element)?;
            (page, page)
        }
    };

    if start > end {
        return Err(SplitError::InvalidSelection(format!(
            "descending range \"{}\"",
            element
        )));
    }

    Ok(PageRange { start, end })
}

fn parse_number(text: &str) -> Result<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitError::InvalidSelection(format!(
            "expected a page number, got \"{}\"",
            text
        )));
    }
    let page: u32 = text.parse().map_err(|_| {
        SplitError::InvalidSelection(format!("page number out of range: \"{}\"", text))
    })?;
    if page == 0 {
        return Err(SplitError::InvalidSelection(
            "page numbers start at 1".to_string(),
        ));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_page() {
        let set = PageSet::parse("5").unwrap();
        assert_eq!(set.ranges(), &[PageRange { start: 5, end: 5 }]);
    }

    #[test]
    fn test_parse_mixed_selection() {
        let set = PageSet::parse("1,3-5,8").unwrap();
        assert_eq!(
            set.ranges(),
            &[
                PageRange { start: 1, end: 1 },
                PageRange { start: 3, end: 5 },
                PageRange { start: 8, end: 8 },
            ]
        );
        assert_eq!(set.max_page(), 8);
    }

    #[test]
    fn test_parse_tolerates_spaces_around_elements() {
        let set = PageSet::parse(" 1 , 3-5 ").unwrap();
        assert_eq!(set.ranges().len(), 2);
    }

    #[test]
    fn test_empty_selection_rejected() {
        assert!(matches!(PageSet::parse(""), Err(SplitError::EmptySelection)));
        assert!(matches!(
            PageSet::parse("   "),
            Err(SplitError::EmptySelection)
        ));
    }

    #[test]
    fn test_empty_element_rejected() {
        assert!(matches!(
            PageSet::parse("1,,3"),
            Err(SplitError::InvalidSelection(_))
        ));
        assert!(matches!(
            PageSet::parse("1,"),
            Err(SplitError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(matches!(
            PageSet::parse("abc"),
            Err(SplitError::InvalidSelection(_))
        ));
        assert!(matches!(
            PageSet::parse("1,x-3"),
            Err(SplitError::InvalidSelection(_))
        ));
        assert!(matches!(
            PageSet::parse("-2"),
            Err(SplitError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_zero_page_rejected() {
        assert!(matches!(
            PageSet::parse("0"),
            Err(SplitError::InvalidSelection(_))
        ));
        assert!(matches!(
            PageSet::parse("0-3"),
            Err(SplitError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_descending_range_rejected() {
        assert!(matches!(
            PageSet::parse("5-2"),
            Err(SplitError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_pages_expands_and_deduplicates() {
        let set = PageSet::parse("1-3,2-4,8").unwrap();
        assert_eq!(set.pages(10).unwrap(), vec![1, 2, 3, 4, 8]);
    }

    #[test]
    fn test_pages_out_of_range() {
        let set = PageSet::parse("1,9").unwrap();
        assert!(matches!(
            set.pages(5),
            Err(SplitError::PageOutOfRange {
                page: 9,
                page_count: 5
            })
        ));
    }
}
