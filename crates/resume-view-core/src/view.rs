//! Fetch state and display instruction tree
//!
//! The core never draws anything. [`build_view`] turns the current fetch
//! state and display preferences into a flat-ish tree of display
//! instructions; the rendering surface (terminal, headless printer) walks
//! the tree and maps each block to whatever it can express.

use crate::prefs::{BackgroundColor, DisplayPreferences, FontFamily, TextColor};
use crate::resume::Resume;

/// Size offset applied to section headings over the body font size
pub const HEADING_SIZE_DELTA: u16 = 3;
/// Fixed font size for project date lines
pub const DATE_FONT_SIZE: u16 = 12;

/// Lifecycle of the resume fetch, as seen by the screen.
///
/// Loading and Failed cannot coexist; replacing the previous value is the
/// only way to leave a state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A fetch is outstanding
    Loading,
    /// The last fetch delivered a resume
    Loaded(Resume),
    /// The last fetch failed; any prior resume has been discarded
    Failed,
}

impl FetchState {
    /// The currently held resume, if any
    pub fn resume(&self) -> Option<&Resume> {
        match self {
            FetchState::Loaded(resume) => Some(resume),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Text styling attached to a display instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u16,
    pub family: FontFamily,
    pub color: TextColor,
    pub bold: bool,
}

/// One display instruction for the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    /// Busy indicator shown while a fetch is outstanding
    Indicator,
    /// Section or name heading
    Heading { text: String, style: TextStyle },
    /// `Label: value` line
    Labeled {
        label: String,
        value: String,
        style: TextStyle,
    },
    /// Plain text block
    Paragraph { text: String, style: TextStyle },
    /// One bulleted line
    Bullet { text: String, style: TextStyle },
    /// Grouped blocks rendered as one unit (a project entry)
    Group(Vec<DisplayBlock>),
    /// Vertical gap
    Spacer,
}

/// The complete render output for one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    /// Background for the content panel, applied even when `blocks` is empty
    pub background: BackgroundColor,
    pub blocks: Vec<DisplayBlock>,
}

/// Build the display instruction tree for the current state.
///
/// Loading yields a lone indicator; Idle and Failed yield an empty tree (no
/// error text reaches the user). A loaded resume yields the header block,
/// summary, skills bullets and project groups in payload order.
pub fn build_view(prefs: &DisplayPreferences, state: &FetchState) -> ViewTree {
    let blocks = match state {
        FetchState::Loading => vec![DisplayBlock::Indicator],
        FetchState::Idle | FetchState::Failed => Vec::new(),
        FetchState::Loaded(resume) => resume_blocks(prefs, resume),
    };

    ViewTree {
        background: prefs.background,
        blocks,
    }
}

fn resume_blocks(prefs: &DisplayPreferences, resume: &Resume) -> Vec<DisplayBlock> {
    let body = TextStyle {
        size: prefs.font_size(),
        family: prefs.font_family,
        color: prefs.text_color,
        bold: false,
    };
    let heading = TextStyle {
        size: prefs.font_size() + HEADING_SIZE_DELTA,
        bold: true,
        ..body
    };
    let title = TextStyle { bold: true, ..body };
    let date = TextStyle {
        size: DATE_FONT_SIZE,
        color: TextColor::DarkGray,
        ..body
    };

    let mut blocks = vec![
        DisplayBlock::Heading {
            text: resume.name.clone(),
            style: heading,
        },
        labeled("Email", &resume.email, body),
        labeled("Phone", &resume.phone, body),
        labeled("Address", &resume.address, body),
        labeled("Twitter", &resume.twitter, body),
        DisplayBlock::Spacer,
        DisplayBlock::Heading {
            text: "Profile".to_string(),
            style: heading,
        },
        DisplayBlock::Paragraph {
            text: resume.summary.clone(),
            style: body,
        },
        DisplayBlock::Spacer,
        DisplayBlock::Heading {
            text: "Skills:".to_string(),
            style: heading,
        },
    ];

    blocks.extend(resume.skills.iter().map(|skill| DisplayBlock::Bullet {
        text: skill.clone(),
        style: body,
    }));

    blocks.push(DisplayBlock::Spacer);
    blocks.push(DisplayBlock::Heading {
        text: "Projects:".to_string(),
        style: heading,
    });

    blocks.extend(resume.projects.iter().map(|project| {
        DisplayBlock::Group(vec![
            DisplayBlock::Paragraph {
                text: project.title.clone(),
                style: title,
            },
            DisplayBlock::Paragraph {
                text: project.description.clone(),
                style: body,
            },
            DisplayBlock::Paragraph {
                text: project.date_range(),
                style: date,
            },
        ])
    }));

    blocks
}

fn labeled(label: &str, value: &str, style: TextStyle) -> DisplayBlock {
    DisplayBlock::Labeled {
        label: label.to_string(),
        value: value.to_string(),
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::Project;

    fn sample_resume() -> Resume {
        Resume {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            twitter: "@alice".to_string(),
            summary: "Engineer.".to_string(),
            skills: vec!["Go".to_string(), "SQL".to_string()],
            projects: vec![],
        }
    }

    fn bullets(tree: &ViewTree) -> Vec<&str> {
        tree.blocks
            .iter()
            .filter_map(|b| match b {
                DisplayBlock::Bullet { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn groups(tree: &ViewTree) -> Vec<&Vec<DisplayBlock>> {
        tree.blocks
            .iter()
            .filter_map(|b| match b {
                DisplayBlock::Group(inner) => Some(inner),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_loading_is_a_lone_indicator() {
        let tree = build_view(&DisplayPreferences::default(), &FetchState::Loading);
        assert_eq!(tree.blocks, vec![DisplayBlock::Indicator]);
    }

    #[test]
    fn test_idle_and_failed_are_empty() {
        let prefs = DisplayPreferences::default();
        assert!(build_view(&prefs, &FetchState::Idle).blocks.is_empty());
        assert!(build_view(&prefs, &FetchState::Failed).blocks.is_empty());
    }

    #[test]
    fn test_empty_tree_still_carries_background() {
        let mut prefs = DisplayPreferences::default();
        prefs.font_family = FontFamily::Serif;
        prefs.background = BackgroundColor::Beige;
        let tree = build_view(&prefs, &FetchState::Idle);
        assert_eq!(tree.background, BackgroundColor::Beige);
    }

    #[test]
    fn test_one_bullet_per_skill_in_order() {
        let state = FetchState::Loaded(sample_resume());
        let tree = build_view(&DisplayPreferences::default(), &state);
        assert_eq!(bullets(&tree), vec!["Go", "SQL"]);
    }

    #[test]
    fn test_one_group_per_project_in_order() {
        let mut resume = sample_resume();
        resume.projects = vec![
            Project {
                title: "First".to_string(),
                description: "one".to_string(),
                start_date: "Jan 2020".to_string(),
                end_date: "Mar 2020".to_string(),
            },
            Project {
                title: "Second".to_string(),
                description: "two".to_string(),
                start_date: "Apr 2020".to_string(),
                end_date: "May 2020".to_string(),
            },
        ];
        let tree = build_view(&DisplayPreferences::default(), &FetchState::Loaded(resume));

        let project_groups = groups(&tree);
        assert_eq!(project_groups.len(), 2);
        for (group, (title, dates)) in project_groups
            .iter()
            .zip([("First", "Jan 2020 - Mar 2020"), ("Second", "Apr 2020 - May 2020")])
        {
            assert!(matches!(&group[0], DisplayBlock::Paragraph { text, style } if text == title && style.bold));
            assert!(matches!(&group[2], DisplayBlock::Paragraph { text, .. } if text == dates));
        }
    }

    #[test]
    fn test_loaded_header_and_contacts() {
        let state = FetchState::Loaded(sample_resume());
        let tree = build_view(&DisplayPreferences::default(), &state);

        assert!(matches!(
            &tree.blocks[0],
            DisplayBlock::Heading { text, .. } if text == "Alice"
        ));
        assert!(matches!(
            &tree.blocks[1],
            DisplayBlock::Labeled { label, value, .. } if label == "Email" && value == "a@x.com"
        ));
        // Empty projects: the section heading still appears, with no groups
        assert!(groups(&tree).is_empty());
    }

    #[test]
    fn test_heading_offset_and_body_style() {
        let mut prefs = DisplayPreferences::default();
        prefs.set_font_size(20);
        prefs.text_color = TextColor::Teal;
        let tree = build_view(&prefs, &FetchState::Loaded(sample_resume()));

        let DisplayBlock::Heading { style, .. } = &tree.blocks[0] else {
            panic!("first block should be the name heading");
        };
        assert_eq!(style.size, 20 + HEADING_SIZE_DELTA);
        assert!(style.bold);
        assert_eq!(style.color, TextColor::Teal);

        let DisplayBlock::Labeled { style, .. } = &tree.blocks[1] else {
            panic!("second block should be a contact line");
        };
        assert_eq!(style.size, 20);
        assert!(!style.bold);
    }
}
