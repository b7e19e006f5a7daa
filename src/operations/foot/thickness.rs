use crate::error::{ModelError, Result};
use crate::model::{ElementId, MeshModel, PartDefinition};

/// Resolves the total through-thickness of the part owning `element`.
///
/// Composite parts sum their integration-point layer thicknesses; homogeneous
/// parts read the section's single thickness. Only one representative element
/// is ever sampled: all boundary elements are assumed to share the same
/// thickness, which is not validated.
///
/// # Errors
///
/// Returns an error if a lookup fails, the composite lay-up is empty, or the
/// resolved thickness is not strictly positive.
pub fn resolve_thickness(model: &MeshModel, element: ElementId) -> Result<f64> {
    let part = model.part(model.element(element)?.part)?;

    let thickness = match &part.definition {
        PartDefinition::Composite(layers) => {
            if layers.is_empty() {
                return Err(ModelError::EmptyComposite.into());
            }
            layers.iter().sum()
        }
        PartDefinition::Homogeneous(section) => model.section(*section)?.thickness,
    };

    if thickness <= 0.0 {
        return Err(ModelError::NonPositiveThickness(thickness).into());
    }
    Ok(thickness)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::model::{Connectivity, ElementData, PartData, SectionData};
    use approx::assert_relative_eq;

    fn tri_in_part(model: &mut MeshModel, definition: PartDefinition) -> ElementId {
        let part = model.add_part(PartData::new(definition));
        let n1 = model.add_node(Point3::new(0.0, 0.0, 0.0));
        let n2 = model.add_node(Point3::new(1.0, 0.0, 0.0));
        let n3 = model.add_node(Point3::new(0.0, 1.0, 0.0));
        model.add_element(ElementData::new(part, Connectivity::Tri([n1, n2, n3])))
    }

    #[test]
    fn section_thickness_is_read_directly() {
        let mut m = MeshModel::new();
        let section = m.add_section(SectionData::new(12.5));
        let e = tri_in_part(&mut m, PartDefinition::Homogeneous(section));

        assert_relative_eq!(resolve_thickness(&m, e).unwrap(), 12.5);
    }

    #[test]
    fn composite_layers_are_summed() {
        let mut m = MeshModel::new();
        let e = tri_in_part(&mut m, PartDefinition::Composite(vec![1.5, 2.0, 1.5]));

        assert_relative_eq!(resolve_thickness(&m, e).unwrap(), 5.0);
    }

    #[test]
    fn empty_composite_fails() {
        let mut m = MeshModel::new();
        let e = tri_in_part(&mut m, PartDefinition::Composite(vec![]));

        assert!(resolve_thickness(&m, e).is_err());
    }

    #[test]
    fn zero_thickness_section_fails() {
        let mut m = MeshModel::new();
        let section = m.add_section(SectionData::new(0.0));
        let e = tri_in_part(&mut m, PartDefinition::Homogeneous(section));

        assert!(resolve_thickness(&m, e).is_err());
    }
}
