//! Shared widgets for property editing

/// A labeled row of three drag values. Returns true if any component
/// changed.
pub(crate) fn vector3_row(
    ui: &mut egui::Ui,
    label: &str,
    values: &mut [f32; 3],
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        for (axis, value) in ["x", "y", "z"].iter().zip(values.iter_mut()) {
            changed |= ui
                .add(
                    egui::DragValue::new(value)
                        .speed(speed)
                        .prefix(format!("{}: ", axis)),
                )
                .changed();
        }
    });
    changed
}
