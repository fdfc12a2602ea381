/// Press handlers and pointer-down tracking shared by pressable components.
pub mod pressable;
