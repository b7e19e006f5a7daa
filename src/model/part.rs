slotmap::new_key_type! {
    /// Unique identifier for a part in the model's part registry.
    pub struct PartId;

    /// Unique identifier for a section definition.
    pub struct SectionId;
}

/// How a part's through-thickness is defined.
#[derive(Debug, Clone)]
pub enum PartDefinition {
    /// Composite lay-up: ordered integration-point layer thicknesses.
    Composite(Vec<f64>),
    /// Homogeneous shell referencing a section.
    Homogeneous(SectionId),
}

/// Data associated with a part. Read-only; used to resolve thickness and
/// to own elements.
#[derive(Debug, Clone)]
pub struct PartData {
    pub definition: PartDefinition,
}

impl PartData {
    /// Creates a new part with the given thickness definition.
    #[must_use]
    pub fn new(definition: PartDefinition) -> Self {
        Self { definition }
    }
}

/// Data associated with a section: a single shell thickness.
#[derive(Debug, Clone, Copy)]
pub struct SectionData {
    pub thickness: f64,
}

impl SectionData {
    /// Creates a new section with the given thickness.
    #[must_use]
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }
}
