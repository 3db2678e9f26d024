use reqwest::Url;

pub const UNKNOWN_REPOSITORY_NAME: &str = "Unknown Repository";

/// Display name for a repository URL: its last path segment without a
/// trailing `.git`.
pub fn derive_repository_name(url: &str) -> String {
    let url = url.trim();

    let last_segment = match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|segment| !segment.is_empty()).next_back())
            .map(|segment| match urlencoding::decode(segment) {
                // an encoded %2F must not turn into a path separator
                Ok(decoded) if !decoded.contains('/') => decoded.into_owned(),
                _ => segment.to_string(),
            }),
        // scp-style remotes (git@host:org/repo.git) and bare paths
        _ => url
            .trim_end_matches('/')
            .rsplit(|c| c == '/' || c == ':')
            .next()
            .map(ToString::to_string),
    };

    last_segment
        .map(|segment| segment.strip_suffix(".git").map(ToString::to_string).unwrap_or(segment))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_REPOSITORY_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_git_suffix() {
        assert_eq!(derive_repository_name("https://host/user/myrepo.git"), "myrepo");
        assert_eq!(derive_repository_name("https://github.com/user/myrepo"), "myrepo");
    }

    #[test]
    fn decodes_percent_encoded_segments() {
        assert_eq!(derive_repository_name("https://host/u/my repo.git"), "my repo");
        assert_eq!(derive_repository_name("https://host/u/caf%C3%A9-api"), "café-api");
        assert_eq!(derive_repository_name("https://host/u/a%2Fb"), "a%2Fb");
    }

    #[test]
    fn handles_trailing_slashes_and_queries() {
        assert_eq!(derive_repository_name("https://github.com/user/myrepo/"), "myrepo");
        assert_eq!(derive_repository_name("https://host/user/myrepo.git?ref=main#readme"), "myrepo");
    }

    #[test]
    fn handles_scp_style_and_codecommit_urls() {
        assert_eq!(derive_repository_name("git@github.com:org/service.git"), "service");
        assert_eq!(
            derive_repository_name("https://git-codecommit.us-east-1.amazonaws.com/v1/repos/billing"),
            "billing"
        );
    }

    #[test]
    fn falls_back_without_a_path_segment() {
        assert_eq!(derive_repository_name("https://github.com"), UNKNOWN_REPOSITORY_NAME);
        assert_eq!(derive_repository_name("https://github.com/"), UNKNOWN_REPOSITORY_NAME);
        assert_eq!(derive_repository_name("https://host/.git"), UNKNOWN_REPOSITORY_NAME);
    }

    proptest! {
        #[test]
        fn name_is_the_final_segment(owner in "[a-z]{1,8}", repo in "[a-zA-Z0-9_-]{1,16}", suffix in prop::bool::ANY) {
            let url = format!("https://example.com/{}/{}{}", owner, repo, if suffix { ".git" } else { "" });
            prop_assert_eq!(derive_repository_name(&url), repo);
        }

        #[test]
        fn name_never_contains_a_slash(url in "\\PC*") {
            let name = derive_repository_name(&url);
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
        }
    }
}
