//! Arithmetic behind the number toy.

/// Smallest and largest number the toy accepts.
pub const MIN_NUMBER: u32 = 0;
pub const MAX_NUMBER: u32 = 100;

pub fn square(x: u32) -> u32 {
    x * x
}

pub fn cube(x: u32) -> u32 {
    x * x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_and_cubes_small_numbers() {
        assert_eq!(square(0), 0);
        assert_eq!(square(7), 49);
        assert_eq!(cube(3), 27);
        assert_eq!(cube(1), 1);
    }

    #[test]
    fn the_largest_input_does_not_overflow() {
        assert_eq!(square(MAX_NUMBER), 10_000);
        assert_eq!(cube(MAX_NUMBER), 1_000_000);
    }
}
