use serde::Serialize;

#[derive(Serialize, Debug)]
pub(super) struct PostPageData<'a> {
    pub site_name: &'a str,
    pub year: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub body: String,
}

/// Title and description sniffed from the first lines of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub description: String,
}
