//! String projection of elements.

use std::fmt::Display;

/// Converts every element to its `Display` form.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::strings;
///
/// assert_eq!(strings(&[1.5, -2.0]), vec!["1.5", "-2"]);
/// ```
pub fn strings<T: Display>(elements: &[T]) -> Vec<String> {
    elements.iter().map(ToString::to_string).collect()
}

/// Converts every element with a caller-supplied conversion.
///
/// Use this when the element's `Display` form is not the representation you
/// want; the conversion fully replaces it.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::strings_using;
///
/// let rendered = strings_using(&[1.5, 2.26], |value| format!("{value:.1}"));
/// assert_eq!(rendered, vec!["1.5", "2.3"]);
/// ```
pub fn strings_using<T, F>(elements: &[T], function: F) -> Vec<String>
where
    F: FnMut(&T) -> String,
{
    elements.iter().map(function).collect()
}

/// Joins the `Display` forms of all elements with `glue`.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::join;
///
/// assert_eq!(join(&["foo", "bar"], ", "), "foo, bar");
/// assert_eq!(join(&[] as &[i32], ", "), "");
/// ```
pub fn join<T: Display>(elements: &[T], glue: &str) -> String {
    use std::fmt::Write;

    let mut joined = String::new();
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            joined.push_str(glue);
        }
        // Writing into a String cannot fail.
        let _ = write!(joined, "{element}");
    }
    joined
}
