use std::num::NonZeroU32;
pub use vec1::vec1;

pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// Wide enough to sum any number of [`UInt`] rolls a session will hold.
pub type Total = u64;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// Die sizes offered as fixed buttons.
pub const STANDARD_SIZES: [UInt; 8] = [2, 4, 6, 8, 10, 12, 20, 100];

/// The fixed buttons as two columns, top to bottom.
pub const BUTTON_COLUMNS: [[UInt; 4]; 2] = [[100, 12, 8, 4], [20, 10, 6, 2]];

pub(crate) const SEPARATOR: &str = " + ";
