/// Tree images published for every berry, one per growth stage.
pub const TREE_VARIANTS: [&str; 3] = ["Taller", "Bloom", "Berry"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Trees { variants: Vec<String> },
    Icons,
}

/// One image to pull: the wiki file page it is described on and the name it is saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub title: String,
    pub filename: String,
}

impl Job {
    pub fn trees() -> Self {
        Job::Trees {
            variants: TREE_VARIANTS.map(String::from).to_vec(),
        }
    }

    pub fn targets(&self, name: &str) -> Vec<Target> {
        match self {
            Job::Trees { variants } => variants
                .iter()
                .map(|variant| {
                    let title = format!("{name}Tree{variant}.png");
                    Target {
                        filename: title.clone(),
                        title,
                    }
                })
                .collect(),
            Job::Icons => vec![Target {
                title: format!("Tag{name}.png"),
                filename: format!("{name}-icon.png"),
            }],
        }
    }
}
