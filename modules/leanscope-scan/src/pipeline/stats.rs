/// Stats from a post classification run.
#[derive(Debug, Default)]
pub struct PostRunStats {
    pub users_seen: u32,
    pub posts_classified: u32,
    pub posts_skipped: u32,
    pub label_coercions: u32,
    pub rows_appended: u32,
}

impl std::fmt::Display for PostRunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Post Classification Complete ===")?;
        writeln!(f, "Users seen:       {}", self.users_seen)?;
        writeln!(f, "Posts classified: {}", self.posts_classified)?;
        writeln!(f, "Posts skipped:    {}", self.posts_skipped)?;
        writeln!(f, "Label coercions:  {}", self.label_coercions)?;
        write!(f, "Rows appended:    {}", self.rows_appended)
    }
}

/// Stats from an author partisanship run.
#[derive(Debug, Default)]
pub struct AuthorRunStats {
    pub users_classified: u32,
    pub users_skipped: u32,
    pub zero_post_users: u32,
    pub label_coercions: u32,
    pub rows_appended: u32,
}

impl std::fmt::Display for AuthorRunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Author Partisanship Complete ===")?;
        writeln!(f, "Users classified: {}", self.users_classified)?;
        writeln!(f, "Users skipped:    {}", self.users_skipped)?;
        writeln!(f, "Zero-post users:  {}", self.zero_post_users)?;
        writeln!(f, "Label coercions:  {}", self.label_coercions)?;
        write!(f, "Rows appended:    {}", self.rows_appended)
    }
}
