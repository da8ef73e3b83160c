//! User-triggerable actions.
//!
//! Every bindable action is an [`Action`] variant. [`ActionRegistry`]
//! carries the metadata (id, name, description, category) used by the
//! keymap loader and the help overlay.

/// Every user-triggerable action in Folio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Profile
    TabAbout,
    TabExperiences,
    TabRecommended,
    TabNext,
    TabPrev,
    // Gallery
    GalleryPrev,
    GalleryNext,
    GalleryDelete,
    ChooserToggle,
    // System
    Help,
    Quit,
}

/// Broad category for grouping actions in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Profile,
    Gallery,
    System,
}

impl ActionCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Gallery => "Gallery",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"gallery_next"`).
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let descriptors = vec![
            ActionDescriptor {
                action: Action::TabAbout,
                id: "tab_about",
                name: "About Me",
                description: "Show the About Me tab",
                category: ActionCategory::Profile,
            },
            ActionDescriptor {
                action: Action::TabExperiences,
                id: "tab_experiences",
                name: "Experiences",
                description: "Show the Experiences tab",
                category: ActionCategory::Profile,
            },
            ActionDescriptor {
                action: Action::TabRecommended,
                id: "tab_recommended",
                name: "Recommended",
                description: "Show the Recommended tab",
                category: ActionCategory::Profile,
            },
            ActionDescriptor {
                action: Action::TabNext,
                id: "tab_next",
                name: "Next Tab",
                description: "Select the tab to the right",
                category: ActionCategory::Profile,
            },
            ActionDescriptor {
                action: Action::TabPrev,
                id: "tab_prev",
                name: "Previous Tab",
                description: "Select the tab to the left",
                category: ActionCategory::Profile,
            },
            ActionDescriptor {
                action: Action::GalleryPrev,
                id: "gallery_prev",
                name: "Previous Image",
                description: "Focus the previous image",
                category: ActionCategory::Gallery,
            },
            ActionDescriptor {
                action: Action::GalleryNext,
                id: "gallery_next",
                name: "Next Image",
                description: "Focus the next image",
                category: ActionCategory::Gallery,
            },
            ActionDescriptor {
                action: Action::GalleryDelete,
                id: "gallery_delete",
                name: "Delete Image",
                description: "Remove the focused image",
                category: ActionCategory::Gallery,
            },
            ActionDescriptor {
                action: Action::ChooserToggle,
                id: "add_image",
                name: "Add Image",
                description: "Open or close the image chooser",
                category: ActionCategory::Gallery,
            },
            ActionDescriptor {
                action: Action::Help,
                id: "help",
                name: "Help",
                description: "Show keyboard shortcuts",
                category: ActionCategory::System,
            },
            ActionDescriptor {
                action: Action::Quit,
                id: "quit",
                name: "Quit",
                description: "Exit Folio",
                category: ActionCategory::System,
            },
        ];
        Self { descriptors }
    }

    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Looks up an action by its keymap identifier.
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
