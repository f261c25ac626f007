//! Error macros for skillrank

/// Macro for returning an invalid colony configuration error
#[macro_export]
macro_rules! bail_config {
    ($field:expr, $reason:expr) => {
        return Err($crate::error::SkillrankError::invalid_configuration(
            $field, $reason,
        ))
    };
}

/// Macro for returning a malformed tag list error
#[macro_export]
macro_rules! bail_tags {
    ($input:expr, $reason:expr) => {
        return Err($crate::error::SkillrankError::invalid_tags($input, $reason))
    };
}
