//! Shared behavior of the parallel-sequence models.

/// A model made of parallel sequences (columns), one entry per source element.
pub trait Columnar {
    /// Every column's name paired with its length, in declaration order.
    fn column_lengths(&self) -> Vec<(&'static str, usize)>;

    /// Number of records, taken from the first column.
    fn len(&self) -> usize {
        self.column_lengths().first().map_or(0, |(_, n)| *n)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every column has the same length.
    fn is_aligned(&self) -> bool {
        let lengths = self.column_lengths();
        lengths.windows(2).all(|pair| pair[0].1 == pair[1].1)
    }
}

/// Implement [`Columnar`] by listing the sequence fields of a model.
macro_rules! columnar {
    ($model:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::models::common::Columnar for $model {
            fn column_lengths(&self) -> Vec<(&'static str, usize)> {
                vec![$((stringify!($field), self.$field.len())),+]
            }
        }
    };
}

pub(crate) use columnar;
