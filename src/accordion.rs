//! FAQ accordion: at most one answer open at a time.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// A question was clicked: close everything, then open it unless it was the open one.
    ///
    /// Returns the item left open. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open_item() {
        let mut faq = Accordion::new(3);
        assert_eq!(faq.toggle(0), Some(0));
        assert_eq!(faq.toggle(2), Some(2));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let mut faq = Accordion::new(2);
        faq.toggle(1);
        assert_eq!(faq.toggle(1), None);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut faq = Accordion::new(2);
        faq.toggle(0);
        assert_eq!(faq.toggle(5), Some(0));
    }
}
