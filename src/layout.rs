use {crate::geometry::VERTEX_STRIDE, strum_macros::Display};

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementFormat {
    #[strum(to_string = "R32G32B32_FLOAT")]
    Float3,
}

impl ElementFormat {
    pub fn size(&self) -> u32 {
        match self {
            ElementFormat::Float3 => 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    PerVertex,
}

/// One entry of an input layout, independent of the graphics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputElement {
    pub semantic: &'static str,
    pub semantic_index: u32,
    pub format: ElementFormat,
    pub slot: u32,
    pub offset: u32,
    pub class: InputClass,
}

pub const POSITION_LAYOUT: [InputElement; 1] = [InputElement {
    semantic: "Position",
    semantic_index: 0,
    format: ElementFormat::Float3,
    slot: 0,
    offset: 0,
    class: InputClass::PerVertex,
}];

/// Bytes per vertex in `slot` as described by `elements`.
pub fn slot_stride(elements: &[InputElement], slot: u32) -> u32 {
    elements
        .iter()
        .filter(|e| e.slot == slot)
        .map(|e| e.offset + e.format.size())
        .max()
        .unwrap_or(0)
}

/// Whether `elements` read exactly one vertex-buffer stride's worth of data.
pub fn matches_vertex_stride(elements: &[InputElement]) -> bool {
    slot_stride(elements, 0) == VERTEX_STRIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_layout_shape() {
        let [element] = POSITION_LAYOUT;
        assert_eq!(element.semantic, "Position");
        assert_eq!(element.semantic_index, 0);
        assert_eq!(element.format, ElementFormat::Float3);
        assert_eq!(element.slot, 0);
        assert_eq!(element.offset, 0);
        assert_eq!(element.class, InputClass::PerVertex);
    }

    #[test]
    fn position_layout_covers_stride() {
        assert_eq!(slot_stride(&POSITION_LAYOUT, 0), 12);
        assert_eq!(slot_stride(&POSITION_LAYOUT, 1), 0);
        assert!(matches_vertex_stride(&POSITION_LAYOUT));
    }

    #[test]
    fn offset_layout_does_not_match() {
        let shifted = [InputElement {
            offset: 4,
            ..POSITION_LAYOUT[0]
        }];
        assert_eq!(slot_stride(&shifted, 0), 16);
        assert!(!matches_vertex_stride(&shifted));
        assert_eq!(ElementFormat::Float3.to_string(), "R32G32B32_FLOAT");
    }
}
