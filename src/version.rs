// Version and build tracking for Bug Exorcist

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD: &str = "0001";

pub fn version_string() -> String {
    format!("v{}-{}", VERSION, BUILD)
}

pub fn full_version_info() -> String {
    format!("Bug Exorcist {} (Build {})", VERSION, BUILD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_strings() {
        assert!(version_string().starts_with('v'));
        assert!(version_string().ends_with(BUILD));
        assert!(full_version_info().starts_with("Bug Exorcist "));
    }
}
