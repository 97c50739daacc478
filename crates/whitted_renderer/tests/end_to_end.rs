//! Whole-pipeline scenarios: scene in, pixel buffer out.

use std::sync::Arc;

use whitted_renderer::{
    render, render_all, trace, Camera, Color, Light, Material, OutputConfig, Rectangle,
    RenderConfig, Scene, Sphere, Vec3,
};

const BACKGROUND: Color = Color::new(0.1, 0.2, 0.3);

/// One white diffuse sphere in front of a camera at the origin looking down -Z,
/// lit by a point light.
fn single_sphere_scene(size: u32, light_position: Vec3) -> Scene {
    let mut scene = Scene::new();
    scene.add_geometry(Sphere::new(
        Vec3::new(0.0, 0.0, -5.0),
        1.0,
        Arc::new(Material::diffuse(Color::ONE)),
    ));
    scene.add_light(Light::point(light_position, Color::ONE, Color::ZERO));
    scene.add_output(
        OutputConfig::new("sphere.ppm", size, size)
            .with_camera(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y)
            .with_fov(90.0)
            .with_background(BACKGROUND)
            .with_ambient(Color::ZERO),
    );
    scene
}

/// Panel between the sphere's front point (0, 0, -4) and a light at (5, 0, -2).
fn occluder() -> Rectangle {
    Rectangle::new(
        Vec3::new(2.5, -1.0, -4.0),
        Vec3::new(2.5, -1.0, -2.0),
        Vec3::new(2.5, 1.0, -2.0),
        Vec3::new(2.5, 1.0, -4.0),
        Arc::new(Material::diffuse(Color::ONE)),
    )
}

#[test]
fn test_all_rays_miss_and_show_background_2x2() {
    let scene = single_sphere_scene(2, Vec3::ZERO);
    let output = &scene.outputs[0];
    let camera = Camera::from_output(output);
    let image = render(&scene, output, &RenderConfig::default());

    assert_eq!(image.as_slice().len(), 2 * 2 * 3);

    // Pixel centres sit about 35 degrees off axis, so every ray passes the
    // unit sphere at five units with room to spare
    for j in 0..2 {
        for i in 0..2 {
            assert!(
                trace(&scene, &camera.get_ray(i, j)).is_none(),
                "pixel ({}, {}) unexpectedly hits",
                i,
                j
            );
            assert_eq!(image.get(i, j), BACKGROUND, "pixel ({}, {})", i, j);
        }
    }
}

#[test]
fn test_centre_pixel_lit_3x3() {
    let scene = single_sphere_scene(3, Vec3::ZERO);
    let image = render(&scene, &scene.outputs[0], &RenderConfig::default());

    // Only the centre ray reaches the sphere
    let centre = image.get(1, 1);
    assert!((centre - Color::ONE).length() < 1e-9, "centre = {:?}", centre);

    for j in 0..3 {
        for i in 0..3 {
            if (i, j) != (1, 1) {
                assert_eq!(image.get(i, j), BACKGROUND, "pixel ({}, {})", i, j);
            }
        }
    }
}

#[test]
fn test_occluded_light_leaves_only_ambient() {
    let light = Vec3::new(5.0, 0.0, -2.0);

    let open = single_sphere_scene(3, light);
    let lit = render(&open, &open.outputs[0], &RenderConfig::default()).get(1, 1);
    assert!(lit.x > 0.0 && lit.y > 0.0 && lit.z > 0.0);

    let mut blocked = single_sphere_scene(3, light);
    blocked.add_geometry(occluder());
    let shadowed = render(&blocked, &blocked.outputs[0], &RenderConfig::default()).get(1, 1);

    // Ambient intensity is zero, so nothing remains
    assert_eq!(shadowed, Color::ZERO);
}

#[test]
fn test_occluded_light_with_ambient() {
    let light = Vec3::new(5.0, 0.0, -2.0);
    let mut scene = single_sphere_scene(3, light);
    scene.geometry.clear();
    scene.add_geometry(Sphere::new(
        Vec3::new(0.0, 0.0, -5.0),
        1.0,
        Arc::new(Material::diffuse(Color::ONE).with_ambient(Color::ONE, 0.5)),
    ));
    scene.add_geometry(occluder());
    scene.outputs[0].ambient_intensity = Color::splat(0.4);

    let shadowed = render(&scene, &scene.outputs[0], &RenderConfig::serial()).get(1, 1);
    assert!((shadowed - Color::splat(0.2)).length() < 1e-12);
}

#[test]
fn test_load_render_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("scene.ppm");

    let json = format!(
        r#"{{
            "geometry": [
                {{ "type": "sphere", "centre": [0, 0, -5], "radius": 1, "dc": [1, 1, 1] }}
            ],
            "light": [ {{ "type": "point", "centre": [0, 0, 0], "id": [1, 1, 1], "is": [0, 0, 0] }} ],
            "output": [ {{ "filename": {:?}, "size": [3, 3], "centre": [0, 0, 0],
                          "lookat": [0, 0, -1], "up": [0, 1, 0], "fov": 90,
                          "bkc": [0, 0, 0] }} ]
        }}"#,
        out_path.to_string_lossy()
    );
    let scene = whitted_core::load_scene_from_str(&json).unwrap();

    let images = render_all(&scene, &RenderConfig::default());
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].image.to_rgb8()[12..15], [255, 255, 255]);

    for rendered in &images {
        rendered.image.save(&rendered.output.filename).unwrap();
    }

    let bytes = std::fs::read(&out_path).unwrap();
    assert!(bytes.starts_with(b"P6"));
    // 9 RGB pixels after the header
    assert!(bytes.len() > 27);
    assert_eq!(&bytes[bytes.len() - 27 + 12..bytes.len() - 27 + 15], &[255, 255, 255]);
}

#[test]
fn test_empty_scene_renders_uniform_background() {
    let mut scene = Scene::new();
    scene.add_light(Light::point(Vec3::Y, Color::ONE, Color::ONE));
    scene.add_output(OutputConfig::new("empty.ppm", 4, 3).with_background(BACKGROUND));

    let images = render_all(&scene, &RenderConfig::default());
    assert_eq!(images.len(), 1);
    assert!(images[0].image.pixels().all(|c| c == BACKGROUND));
}
