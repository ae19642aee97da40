use crate::{Card, CostBucket};

/// Builds the per-bucket search strings for one commander.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    identity: String,
    theme: Option<String>,
}

impl QueryBuilder {
    pub fn new(identity: impl Into<String>, theme: Option<String>) -> Self {
        Self {
            identity: identity.into(),
            theme,
        }
    }

    pub fn for_commander(commander: &Card, theme: Option<String>) -> Self {
        Self::new(commander.identity_query(), theme)
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn unthemed(&self, bucket: CostBucket) -> String {
        format!(
            "f:edh sort:edhrec -t:land -medallion id:{} cmc{}",
            self.identity,
            bucket.label()
        )
    }

    /// Falls back to the unthemed query when no theme is set.
    pub fn themed(&self, bucket: CostBucket) -> String {
        match &self.theme {
            Some(theme) => format!(
                "f:edh sort:edhrec {} -t:land -medallion id:{} cmc{}",
                theme,
                self.identity,
                bucket.label()
            ),
            None => self.unthemed(bucket),
        }
    }

    pub fn build(&self, bucket: CostBucket, themed: bool) -> String {
        if themed {
            self.themed(bucket)
        } else {
            self.unthemed(bucket)
        }
    }
}
