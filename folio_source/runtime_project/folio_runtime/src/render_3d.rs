use folio_animation::FrameTime;
use folio_nodes::{LightKind, Material, Node, NodeKind, SurfaceKind};
use folio_render_bridge::{
    AmbientLight3DState, Command3D, LightState, MaterialState, PointLight3DState, RayLight3DState,
    RenderCommand, ResourceCommand, ShaderKind,
};
use folio_structs::Vector3;

/// One-time resources for `node`, sent at mount.
pub(crate) fn resource_command(node: &Node) -> Option<RenderCommand> {
    let command = match &node.kind {
        NodeKind::Shape(geometry) => ResourceCommand::CreateMesh {
            node: node.id,
            source: geometry.source(),
        },
        NodeKind::ParticleCloud(field) => ResourceCommand::CreateParticles {
            node: node.id,
            positions: field.cloud.flat_positions(),
            sizes: field.cloud.sizes.clone(),
            colors: field.cloud.colors.iter().map(|c| c.to_array()).collect(),
        },
        NodeKind::Light(_) | NodeKind::CameraRig => return None,
    };
    Some(RenderCommand::Resource(command))
}

/// Per-tick state for `node`. Camera rigs are reported through `SetCamera`.
pub(crate) fn node_command(node: &Node, time: FrameTime) -> Option<RenderCommand> {
    let command = match &node.kind {
        NodeKind::Shape(_) => Command3D::UpsertShape {
            node: node.id,
            model: node.world_matrix().to_cols_array_2d(),
            material: material_state(&node.material),
        },
        NodeKind::ParticleCloud(field) => Command3D::UpsertParticles {
            node: node.id,
            model: node.world_matrix().to_cols_array_2d(),
            material: material_state(&node.material),
            twinkle: field.twinkle_rate.map(|rate| time.elapsed * rate),
        },
        NodeKind::Light(light) => {
            let color = light.color.to_array();
            let intensity = light.intensity.max(0.0);
            let state = match light.kind {
                LightKind::Ambient => LightState::Ambient(AmbientLight3DState { color, intensity }),
                LightKind::Directional => {
                    let toward_origin = -node.world_position();
                    let direction = if toward_origin.length() > f32::EPSILON {
                        toward_origin.normalized()
                    } else {
                        Vector3::new(0.0, -1.0, 0.0)
                    };
                    LightState::Ray(RayLight3DState {
                        direction: direction.to_array(),
                        color,
                        intensity,
                    })
                }
                LightKind::Point => LightState::Point(PointLight3DState {
                    position: node.world_position().to_array(),
                    color,
                    intensity,
                }),
            };
            Command3D::UpsertLight {
                node: node.id,
                light: state,
            }
        }
        NodeKind::CameraRig => return None,
    };
    Some(RenderCommand::ThreeD(command))
}

pub(crate) fn material_state(material: &Material) -> MaterialState {
    let [r, g, b] = material.color.to_array();
    MaterialState {
        shader: match material.surface {
            SurfaceKind::Standard => ShaderKind::Standard,
            SurfaceKind::Distort => ShaderKind::Distort,
            SurfaceKind::Wobble => ShaderKind::Wobble,
            SurfaceKind::Points => ShaderKind::Points,
        },
        color: [r, g, b, material.opacity.clamp(0.0, 1.0)],
        emissive: material.emissive.to_array(),
        emissive_intensity: material.emissive_intensity.max(0.0),
        distortion: material.distortion,
        distortion_speed: material.distortion_speed,
        roughness: material.roughness,
        metalness: material.metalness,
        wireframe: material.wireframe,
        size: material.size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ids::NodeID;
    use folio_nodes::Light;
    use folio_structs::Color;

    #[test]
    fn directional_light_points_at_origin() {
        let mut node = Node::light("key", Light::directional(Color::WHITE, 1.0))
            .at(Vector3::new(0.0, 10.0, 0.0));
        node.id = NodeID::new(4);
        let Some(RenderCommand::ThreeD(Command3D::UpsertLight {
            light: LightState::Ray(ray),
            ..
        })) = node_command(&node, FrameTime::at(0.0))
        else {
            panic!("expected a ray light");
        };
        assert!((ray.direction[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn camera_rig_emits_nothing() {
        let rig = Node::camera_rig("camera");
        assert!(node_command(&rig, FrameTime::at(1.0)).is_none());
        assert!(resource_command(&rig).is_none());
    }

    #[test]
    fn opacity_travels_in_alpha() {
        let state = material_state(&Material::points(Color::hex(0x8b5cf6), 0.02, 0.6));
        assert_eq!(state.shader, ShaderKind::Points);
        assert!((state.color[3] - 0.6).abs() < 1e-6);
    }
}
