//! Digit-to-letter bucket table.
//!
//! The 52 ASCII letters are split into ten pairwise disjoint buckets, one per decimal digit,
//! following the QWERTY layout with alternating capitalization. Since no letter belongs to two
//! buckets, every letter of a slug identifies the digit it was drawn for.

/// Letter buckets indexed by digit value.
pub const BUCKETS: [&[u8]; 10] = [
    b"qWeRtY", // 0
    b"QwErTy", // 1
    b"uIoPa",  // 2
    b"UiOpA",  // 3
    b"sDfGh",  // 4
    b"SdFgH",  // 5
    b"jKlZx",  // 6
    b"JkLzX",  // 7
    b"cVbNm",  // 8
    b"CvBnM",  // 9
];

const NONE: u8 = u8::MAX;

/// ASCII code to digit value, or `NONE` for characters outside all buckets.
static DIGIT_OF: [u8; 128] = {
    let mut table = [NONE; 128];
    let mut digit = 0;
    while digit < BUCKETS.len() {
        let bucket = BUCKETS[digit];
        let mut i = 0;
        while i < bucket.len() {
            table[bucket[i] as usize] = digit as u8;
            i += 1;
        }
        digit += 1;
    }
    table
};

/// Returns the letter bucket of `digit`.
///
/// # Panics
///
/// Panics if `digit` is greater than 9.
pub const fn bucket(digit: u8) -> &'static [u8] {
    BUCKETS[digit as usize]
}

/// Returns the digit whose bucket contains `letter`, or `None` if `letter` is not an ASCII
/// letter.
///
/// # Examples
///
/// ```rust
/// use unique_slug::bucket::digit_of;
///
/// assert_eq!(digit_of(b'Q'), Some(1));
/// assert_eq!(digit_of(b'q'), Some(0));
/// assert_eq!(digit_of(b'-'), None);
/// ```
pub fn digit_of(letter: u8) -> Option<u8> {
    match DIGIT_OF.get(letter as usize) {
        Some(&d) if d != NONE => Some(d),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{digit_of, BUCKETS};

    /// Holds ten buckets of five or six letters each
    #[test]
    fn holds_ten_buckets_of_five_or_six_letters_each() {
        assert_eq!(BUCKETS.len(), 10);
        for bucket in BUCKETS {
            assert!(bucket.len() == 5 || bucket.len() == 6);
            assert!(bucket.iter().all(u8::is_ascii_alphabetic));
        }
        assert_eq!(BUCKETS.iter().map(|b| b.len()).sum::<usize>(), 52);
    }

    /// Keeps buckets pairwise disjoint
    #[test]
    fn keeps_buckets_pairwise_disjoint() {
        for (i, a) in BUCKETS.iter().enumerate() {
            for b in &BUCKETS[i + 1..] {
                assert!(a.iter().all(|c| !b.contains(c)));
            }
            for (j, c) in a.iter().enumerate() {
                assert!(!a[j + 1..].contains(c), "duplicate letter in bucket {}", i);
            }
        }
    }

    /// Recovers the digit of every ASCII letter
    #[test]
    fn recovers_the_digit_of_every_ascii_letter() {
        for (d, bucket) in BUCKETS.iter().enumerate() {
            for &c in bucket.iter() {
                assert_eq!(digit_of(c), Some(d as u8));
            }
        }

        for c in 0..=u8::MAX {
            assert_eq!(digit_of(c).is_some(), c.is_ascii_alphabetic(), "{}", c);
        }
    }

    /// Places letters of the scenario digits in their buckets
    #[test]
    fn places_letters_of_the_scenario_digits_in_their_buckets() {
        assert_eq!(BUCKETS[1], b"QwErTy");
        assert_eq!(BUCKETS[7], b"JkLzX");
        assert_eq!(BUCKETS[3], b"UiOpA");
        assert_eq!(BUCKETS[2], b"uIoPa");
        assert_eq!(BUCKETS[0], b"qWeRtY");
    }
}
