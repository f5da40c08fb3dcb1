use super::element::Element;
use nalgebra::Point3;

/// Placeholder written for an unset force-field type column.
pub const DEFAULT_FORCE_FIELD_TYPE: &str = "**";
/// Placeholder written for an unset flags column.
pub const DEFAULT_FLAGS: &str = "-";

/// Represents an atom of a [`Molecule`](super::molecule::Molecule).
///
/// The atom itself carries no connectivity: bonds are stored in the owning
/// molecule's adjacency map, keyed by stable atom handles. The force-field type and
/// flags columns of a HIN record are kept verbatim and never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Caller-assigned identifier, unique within one molecule.
    pub id: usize,
    /// Optional free-form label (e.g., "C1").
    pub label: Option<String>,
    /// The atom's element, as resolved from the catalog.
    pub element: Element,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    /// The partial charge column of the record.
    pub partial_charge: i32,
    /// Opaque force-field type column, preserved for round-trips.
    pub force_field_type: String,
    /// Opaque flags column, preserved for round-trips.
    pub flags: String,
}

impl Atom {
    /// Creates an atom with no label, zero charge and placeholder opaque columns.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the atom; uniqueness is only enforced by the molecule.
    /// * `element` - The element of the atom.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(id: usize, element: Element, position: Point3<f64>) -> Self {
        Self {
            id,
            label: None,
            element,
            position,
            partial_charge: 0,
            force_field_type: DEFAULT_FORCE_FIELD_TYPE.to_string(),
            flags: DEFAULT_FLAGS.to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns a copy with the same identity, geometry, charge and opaque columns.
    ///
    /// The copy is detached from any molecule, so once added somewhere it starts
    /// out with no bonds.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }
}
