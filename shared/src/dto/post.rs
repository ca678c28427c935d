use serde::{Deserialize, Serialize};

/// A blog post as owned by the remote API.
///
/// The id is opaque to the client; it is only ever echoed back in
/// `/api/post/{id}` paths and update bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Fields submitted when creating a post (the API assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_list_decode() {
        // Shape of GET /api/post
        let json = r#"[
            {"id":"1","title":"First","content":"Hello"},
            {"id":"2","title":"Second","content":"World"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[1].title, "Second");
    }

    #[test]
    fn test_post_draft_wire_shape() {
        let draft = PostDraft {
            title: "Title".to_string(),
            content: "Body".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"title":"Title","content":"Body"}"#);
    }
}
