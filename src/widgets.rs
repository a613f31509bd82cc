//! Link and icon descriptors handed to the presentation layer.
//!
//! A decorated route does not render anything itself. Instead
//! [`DecoratedRoute::link`](crate::DecoratedRoute::link) and
//! [`DecoratedRoute::icon_view`](crate::DecoratedRoute::icon_view) return
//! these plain values, and the host turns them into real widgets.

use crate::route::IconName;

/// Class applied to every route link.
pub const LINK_CLASS: &str = "hover:underline";

/// An in-app link to a resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Link {
    /// Target path, including the query string when one was given
    pub to: String,
    /// Class name for the anchor
    pub class_name: String,
}

impl Link {
    /// Link to `to` with the default [`LINK_CLASS`].
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            class_name: LINK_CLASS.to_string(),
        }
    }

    /// Path part of the target, without the query string.
    pub fn path(&self) -> &str {
        self.to.split_once('?').map_or(self.to.as_str(), |(path, _)| path)
    }

    /// Query part of the target, without the `?`.
    pub fn query(&self) -> Option<&str> {
        self.to.split_once('?').map(|(_, query)| query)
    }
}

/// A route icon with optional presentation props
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Icon {
    /// Icon name in the host's icon set
    pub name: IconName,
    /// Extra class names
    pub class_name: Option<String>,
    /// Size in pixels
    pub size: Option<u32>,
}

impl Icon {
    /// Icon with no props set.
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            class_name: None,
            size: None,
        }
    }

    /// Set the class name.
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}
