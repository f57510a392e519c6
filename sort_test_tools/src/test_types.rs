use std::fmt;

/// Heap owning, non-Copy element. A value that a sort loses or duplicates through a bitwise copy
/// turns into a leak or a double free, which miri and the allocator catch.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapStr {
    data: Box<str>,
}

impl HeapStr {
    pub fn new(val: i32) -> Self {
        // Zero padded, so for non-negative values the string order is the numeric order.
        Self {
            data: format!("{:010}", val.unsigned_abs()).into_boxed_str(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

impl fmt::Debug for HeapStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
