//! Pass-through filtering of host attributes.

use crate::types::GridOption;

/// Drop attributes whose name is one of the `recognized` grid options.
///
/// Everything else is forwarded untouched and in order.
pub(crate) fn pass_through(
    attrs: Vec<(String, String)>,
    recognized: GridOption,
) -> Vec<(String, String)> {
    attrs
        .into_iter()
        .filter(|(name, _)| match GridOption::from_attr_name(name) {
            Some(option) if recognized.contains(option) => {
                tracing::debug!(attribute = %name, "grid option not forwarded to host");
                false
            }
            _ => true,
        })
        .collect()
}
