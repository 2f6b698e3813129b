//! Built-in otitis symptom graph
//!
//! Hierarchy: mild symptoms lead to intermediate ones, then to severe ones, then
//! to the diagnosis. There is no "healthy" node; failing to reach `OTITIS` is
//! the negative outcome.

use super::GraphModel;

/// Identifier of the diagnostic target in the built-in graph
pub const OTITIS: &str = "OTITIS";

/// The fixed graph the demonstrator ships with
pub fn otitis_graph() -> GraphModel {
    GraphModel::new(OTITIS)
        // Level 1: initial, mild
        .with_edges("dolor_oido", ["presion_oido", "dolor_punzante"])
        .with_edges("zumbido", ["presion_oido", "perdida_audicion"])
        // Level 2: intermediate
        .with_edges("presion_oido", ["oido_tapado", "dolor_punzante"])
        .with_edges("fiebre", ["fiebre_alta", "escalofrios"])
        .with_edges("perdida_audicion", ["oido_tapado"])
        .with_edges("escalofrios", ["fiebre_alta"])
        // Level 3: severe
        .with_edges("oido_tapado", ["secrecion"])
        .with_edges("dolor_punzante", ["secrecion", OTITIS])
        .with_edges("fiebre_alta", ["secrecion"])
        // Level 4: critical
        .with_edges("secrecion", [OTITIS])
        .with_edges(OTITIS, Vec::<String>::new())
        .with_weight("dolor_oido", 0.3)
        .with_weight("zumbido", 0.2)
        .with_weight("presion_oido", 0.4)
        .with_weight("fiebre", 0.3)
        .with_weight("perdida_audicion", 0.4)
        .with_weight("oido_tapado", 0.5)
        .with_weight("dolor_punzante", 0.7)
        .with_weight("fiebre_alta", 0.6)
        .with_weight("escalofrios", 0.25)
        .with_weight("secrecion", 0.9)
        .with_weight(OTITIS, 1.0)
}
