use bevy::prelude::*;

/// Marker for the entity driven by the normalized player controls.
#[derive(Component, Debug, Default)]
pub struct PlayerController;
