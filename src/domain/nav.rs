/*
 * Responsibility
 * - Navigation highlight helper: is the current path "under" a nav href
 */

/// `/` matches only itself; any other href matches itself and its subtree.
pub fn is_active_path(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    current == href || current.starts_with(&format!("{href}/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_exactly() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/catalog", "/"));
    }

    #[test]
    fn sections_match_their_subtree() {
        assert!(is_active_path("/blog/hello", "/blog"));
        assert!(is_active_path("/blog", "/blog"));
        assert!(!is_active_path("/blogging", "/blog"));
        assert!(!is_active_path("/faq", "/blog"));
    }
}
