//! Single-use fast-forward cursor over the category list
//!
//! While active, every category is refused until one matches the target.
//! That category and everything after it are admitted, and the cursor never
//! consults its target again.

use crate::config::SiteConfig;
use crate::Result;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SkipCursor {
    /// Still looking for the target category
    Active(Url),

    /// Target found (or none was set); everything is admitted
    #[default]
    Cleared,
}

impl SkipCursor {
    /// Creates a cursor from an optional target URL
    pub fn new(target: Option<Url>) -> Self {
        match target {
            Some(url) => Self::Active(url),
            None => Self::Cleared,
        }
    }

    /// Creates a cursor from the site's `skip-to` setting
    pub fn from_config(site: &SiteConfig) -> Result<Self> {
        let target = site.skip_to.as_deref().map(Url::parse).transpose()?;
        Ok(Self::new(target))
    }

    /// Decides whether `category` should be harvested
    ///
    /// A match clears the cursor, so this returns true for every later call.
    pub fn admit(&mut self, category: &Url) -> bool {
        let matched = match self {
            Self::Cleared => return true,
            Self::Active(target) => *target == *category,
        };

        if matched {
            tracing::info!("Skip target {} reached, resuming harvest", category);
            *self = Self::Cleared;
        }

        matched
    }

    /// Returns true while the target has not been reached
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}
