use super::*;

fn hrefs(list: &[Option<&str>]) -> Vec<Option<String>> {
    list.iter().map(|h| h.map(str::to_owned)).collect()
}

fn plain_click() -> ClickIntent {
    ClickIntent { same_origin: true, ..ClickIntent::default() }
}

#[test]
fn page_segment_takes_last_path_segment() {
    assert_eq!(page_segment("/projects.html"), "projects.html");
    assert_eq!(page_segment("/site/contact.html"), "contact.html");
    assert_eq!(page_segment("projects.html"), "projects.html");
    assert_eq!(page_segment("https://example.com/blog/post.html"), "post.html");
}

#[test]
fn page_segment_defaults_to_index() {
    assert_eq!(page_segment("/"), "index.html");
    assert_eq!(page_segment(""), "index.html");
    assert_eq!(page_segment("/portfolio/"), "index.html");
}

#[test]
fn page_segment_ignores_query_and_fragment() {
    assert_eq!(page_segment("/contact.html?ref=nav"), "contact.html");
    assert_eq!(page_segment("/contact.html#form"), "contact.html");
    assert_eq!(page_segment("/?x=1"), "index.html");
}

#[test]
fn exactly_the_matching_link_becomes_active() {
    let links = hrefs(&[Some("index.html"), Some("projects.html"), Some("contact.html")]);
    assert_eq!(
        active_link_flags(&links, "/projects.html"),
        [Some(false), Some(true), Some(false)]
    );
}

#[test]
fn nested_hrefs_compare_by_last_segment() {
    let links = hrefs(&[Some("/"), Some("../work/projects.html"), Some("./contact.html")]);
    assert_eq!(active_link_flags(&links, "/contact.html"), [Some(false), Some(false), Some(true)]);
    assert_eq!(active_link_flags(&links, "/"), [Some(true), Some(false), Some(false)]);
}

#[test]
fn links_without_href_are_left_alone() {
    let links = hrefs(&[None, Some("about.html")]);
    assert_eq!(active_link_flags(&links, "/about.html"), [None, Some(true)]);
}

#[test]
fn no_match_clears_every_link() {
    let links = hrefs(&[Some("index.html"), Some("projects.html")]);
    assert_eq!(active_link_flags(&links, "/resume.html"), [Some(false), Some(false)]);
}

#[test]
fn plain_same_origin_click_is_intercepted() {
    assert!(plain_click().should_intercept());
    assert!(ClickIntent { target: Some("_self".into()), ..plain_click() }.should_intercept());
    assert!(ClickIntent { target: Some(String::new()), ..plain_click() }.should_intercept());
}

#[test]
fn cross_origin_click_is_left_to_browser() {
    assert!(!ClickIntent { same_origin: false, ..plain_click() }.should_intercept());
}

#[test]
fn modified_or_non_primary_clicks_are_left_to_browser() {
    assert!(!ClickIntent { modified: true, ..plain_click() }.should_intercept());
    assert!(!ClickIntent { button: 1, ..plain_click() }.should_intercept());
    assert!(!ClickIntent { default_prevented: true, ..plain_click() }.should_intercept());
}

#[test]
fn new_tab_and_download_links_are_left_to_browser() {
    assert!(!ClickIntent { target: Some("_blank".into()), ..plain_click() }.should_intercept());
    assert!(!ClickIntent { download: true, ..plain_click() }.should_intercept());
}

#[test]
fn history_path_keeps_query_and_fragment() {
    assert_eq!(history_path("/contact.html", "", ""), "/contact.html");
    assert_eq!(history_path("/contact.html", "?ref=nav", "#form"), "/contact.html?ref=nav#form");
}

#[cfg(not(feature = "csr"))]
#[test]
fn install_is_inert_off_browser() {
    assert!(!install(&Site::new(crate::config::SiteConfig::default())));
}
