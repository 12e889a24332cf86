use crate::CitizenType;
use metrics::{IntoLabels, Label, SharedString};

pub const TYPE: &str = "type";
pub const VALID: &str = "valid";
pub const REASON: &str = "reason";

/// Holder of multiple [Label] attached to the citizen id metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Labels identifying the kind of subject a citizen id belongs to
    pub fn for_citizen_type(citizen_type: CitizenType) -> Self {
        Labels::new(&[(TYPE, citizen_type.as_ref().to_string())])
    }

    /// Clone the actual [Labels] with one additional key-value label
    pub fn clone_with_label(
        &self,
        label: (
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        ),
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.push(Label::from(&label));
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
