use serde::Serialize;

/// One book in the library catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub id: String,
    pub title: String,
    pub author: String,
}

/// One highlight or note, as stored in the annotations database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub asset_id: String,
    pub representative_text: Option<String>,
    pub selected_text: Option<String>,
    pub style: i64,
    pub chapter_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSummary {
    pub title: String,
    pub author: String,
    pub count: i64,
}

/// An asset together with its highlights, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedBook {
    pub asset: Asset,
    pub count: usize,
    pub annotations: Vec<Annotation>,
}

impl HighlightedBook {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            count: 0,
            annotations: Vec::new(),
        }
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
        self.count = self.annotations.len();
    }

    pub fn heading(&self) -> String {
        format!("{}, {}", self.asset.title, self.asset.author)
    }
}
