//! Sample - Static List Data

/// One row of the static list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// Rows shown by the list section, in display order
pub const SAMPLE_ITEMS: [SampleItem; 5] = [
    SampleItem {
        title: "TouchableOpacity",
        description: "TouchableOpacity example",
    },
    SampleItem {
        title: "Modal",
        description: "Modal demonstration",
    },
    SampleItem {
        title: "Image",
        description: "Image showcase",
    },
    SampleItem {
        title: "Button",
        description: "Button functionality",
    },
    SampleItem {
        title: "FlatList",
        description: "FlatList rendering",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_fixed_order() {
        let titles: Vec<_> = SAMPLE_ITEMS.iter().map(|item| item.title).collect();
        assert_eq!(
            titles,
            vec!["TouchableOpacity", "Modal", "Image", "Button", "FlatList"]
        );
    }

    #[test]
    fn test_sample_items_have_descriptions() {
        assert!(SAMPLE_ITEMS.iter().all(|item| !item.description.is_empty()));
    }
}
