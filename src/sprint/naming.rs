use crate::constants::{SPRINT_DATE_FORMAT, SPRINT_NAME_PREFIX};

use super::SprintWindow;

/// `COPY_<template>_<MMDDYY>_to_<MMDDYY>`, with spaces in the template name
/// replaced by underscores.
pub fn long_sprint_name(template_name: &str, window: &SprintWindow) -> String {
    format!(
        "{}_{}_{}_to_{}",
        SPRINT_NAME_PREFIX,
        template_name.replace(' ', "_"),
        window.start.format(SPRINT_DATE_FORMAT),
        window.end.format(SPRINT_DATE_FORMAT)
    )
}
