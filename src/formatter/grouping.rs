/// Insert grouping separators into the integer part of a digit string
///
/// Groups are counted leftward from the decimal point: the first group has
/// `primary_size` digits, every later group `secondary_size` digits when given, else
/// `primary_size`. The fraction part is left untouched. The separator inserted is the
/// pattern symbol `,`, which is later replaced by the locale glyph.
///
/// # Arguments
/// * `digits` - Unsigned plain decimal digits, `.` as decimal separator
/// * `primary_size` - Size of the group nearest the decimal point; 0 disables grouping
/// * `secondary_size` - Size of the remaining groups, if different
///
/// # Examples
/// ```
/// use locale_number_format::formatter::insert_grouping_separators;
///
/// assert_eq!(insert_grouping_separators("1234567.891", 3, None), "1,234,567.891");
/// assert_eq!(insert_grouping_separators("12345678", 3, Some(2)), "1,23,45,678");
/// ```
pub fn insert_grouping_separators(
    digits: &str,
    primary_size: u32,
    secondary_size: Option<u32>,
) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut group_size = primary_size as usize;
    let mut secondary = secondary_size.filter(|size| *size > 0);
    let mut groups: Vec<&str> = Vec::new();
    let mut index = integer.len();

    while group_size > 0 && index > group_size {
        groups.push(&integer[index - group_size..index]);
        index -= group_size;
        if let Some(size) = secondary.take() {
            group_size = size as usize;
        }
    }
    groups.push(&integer[..index]);
    groups.reverse();

    let mut result = groups.join(",");
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}
