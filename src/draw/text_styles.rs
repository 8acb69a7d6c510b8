use embedded_graphics::mono_font::MonoFont;
use paste::paste;

pub type FontHandle = &'static MonoFont<'static>;

macro_rules! make_profont_table {
    ([$($size:literal),+]) => {
        /// Point sizes shipped by profont, ascending
        pub const PROFONT_SIZES: &[u32] = &[$($size),+];

        /// The profont face for an exact point size
        pub fn profont(size: u32) -> Option<FontHandle> {
            match size {
                $(
                    $size => Some(paste! { &::profont::[<PROFONT_ $size _POINT>] }),
                )+
                _ => None,
            }
        }
    };
}

make_profont_table!([7, 9, 10, 12, 14, 18, 24]);

/// The profont face closest to `size` points
pub fn nearest_profont(size: u32) -> FontHandle {
    PROFONT_SIZES
        .iter()
        .min_by_key(|candidate| candidate.abs_diff(size))
        .and_then(|candidate| profont(*candidate))
        .unwrap_or(&::profont::PROFONT_24_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_sizes_resolve() {
        for size in PROFONT_SIZES {
            assert!(profont(*size).is_some(), "missing profont {size}");
        }
        assert!(profont(11).is_none());
    }

    #[test]
    fn nearest_picks_closest_size() {
        let font = nearest_profont(13);
        assert_eq!(
            font.character_size,
            ::profont::PROFONT_12_POINT.character_size
        );
        assert_eq!(
            nearest_profont(100).character_size,
            ::profont::PROFONT_24_POINT.character_size
        );
    }
}
