//! Movement domain: side-scrolling camera.

use bevy::prelude::*;

use crate::movement::CameraFocus;

/// How far ahead of the focus the camera looks.
const CAMERA_LEAD: f32 = 4.0;
const CAMERA_HEIGHT: f32 = 1.0;

pub(crate) fn follow_focus(
    focus: Query<&Transform, (With<CameraFocus>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(target) = focus.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    camera.translation.x = target.translation.x + CAMERA_LEAD;
    camera.translation.y = CAMERA_HEIGHT;
}
