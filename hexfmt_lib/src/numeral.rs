/// Character width occupied by the numeral of one group of `group_bytes`
/// bytes rendered in `radix`.
///
/// A group size of 0 is treated as 1. Radix 8 and 10 widths are only defined
/// for group sizes 1, 2, 4 and 8; any other size, like any unknown radix,
/// falls back to a width of 2 rather than failing.
pub fn numeral_width(group_bytes: usize, radix: u32) -> usize {
    let bytes = if group_bytes == 0 { 1 } else { group_bytes };

    match radix {
        2 => bytes * 8,
        8 => match bytes {
            1 => 3,
            2 => 6,
            4 => 11,
            8 => 22,
            _ => 2,
        },
        10 => match bytes {
            1 => 3,
            2 => 6,
            4 => 10,
            8 => 20,
            _ => 2,
        },
        16 => bytes * 2,
        _ => 2,
    }
}
