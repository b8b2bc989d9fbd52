//! Initial body layouts, one per mode

use bevy::color::Color;
use rand::Rng;

use super::mode::Mode;
use super::params::{Parameters, AU};
use super::spawn::random_galaxy_star;
use super::states::{Body, Mass};

/// Build the bodies a fresh scenario of `mode` starts with
pub fn preset_bodies<R: Rng + ?Sized>(mode: Mode, params: &Parameters, rng: &mut R) -> Vec<Body> {
    match mode {
        Mode::SolarSystem => solar_system(params.scale),
        Mode::ThreeBody => three_body(params.scale),
        Mode::Galaxy => galaxy(params.star_count, params.scale, rng),
        Mode::Custom => Vec::new(),
    }
}

fn hex(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Anchored sun plus the eight planets at their mean orbital radii
pub fn solar_system(scale: f64) -> Vec<Body> {
    // name, distance (AU), radius, color, mass coefficient, mass exponent
    const PLANETS: [(&str, f64, f64, u32, f64, i32); 8] = [
        ("Mercury", 0.387, 1.0, 0xaaaaaa, 3.3, 23),
        ("Venus", 0.723, 1.0, 0xffa500, 4.87, 24),
        ("Earth", 1.0, 3.0, 0x3333ff, 5.97, 24),
        ("Mars", 1.524, 2.0, 0xff0000, 6.42, 23),
        ("Jupiter", 5.2, 7.0, 0xffa500, 1.898, 27),
        ("Saturn", 9.58, 6.0, 0xffd700, 5.683, 26),
        ("Uranus", 19.22, 5.0, 0x00ffff, 8.681, 25),
        ("Neptune", 30.05, 5.0, 0x0000ff, 1.024, 26),
    ];

    let sun = Body::on_plane("Sun", 0.0, 0.0, scale, Mass::new_unchecked(2.0, 30))
        .with_radius(15.0)
        .with_color(hex(0xffff00))
        .anchored();

    let planets = PLANETS.iter().map(|&(name, au, radius, color, coefficient, exponent)| {
        Body::on_plane(name, au * AU, 0.0, scale, Mass::new_unchecked(coefficient, exponent))
            .with_radius(radius)
            .with_color(hex(color))
            .with_emissive(false)
    });

    std::iter::once(sun).chain(planets).collect()
}

/// Three equal stars on an equilateral triangle with side 2 AU
pub fn three_body(scale: f64) -> Vec<Body> {
    let mass = Mass::new_unchecked(1.0, 30);
    vec![
        Body::on_plane("Star1", -AU, 0.0, scale, mass).with_radius(6.0).with_color(hex(0xff3333)),
        Body::on_plane("Star2", AU, 0.0, scale, mass).with_radius(6.0).with_color(hex(0x6565ff)),
        Body::on_plane("Star3", 0.0, AU * 3f64.sqrt(), scale, mass).with_radius(6.0).with_color(hex(0xffff00)),
    ]
}

pub fn galaxy<R: Rng + ?Sized>(star_count: usize, scale: f64, rng: &mut R) -> Vec<Body> {
    (0..star_count)
        .map(|i| random_galaxy_star(rng, format!("Star{}", i + 1), scale))
        .collect()
}

/// The sun custom mode can add once, at the origin
pub fn custom_sun(scale: f64) -> Body {
    Body::on_plane("Sun", 0.0, 0.0, scale, Mass::new_unchecked(1.0, 33))
        .with_radius(15.0)
        .with_color(hex(0xffff00))
        .anchored()
}

/// BT.709 perceived brightness of an sRGB color
pub fn brightness(color: Color) -> f32 {
    let c = color.to_srgba();
    0.2126 * c.red + 0.7152 * c.green + 0.0722 * c.blue
}

/// Glow strength for a body: darker colors glow harder, never below 2
pub fn emissive_intensity(body: &Body, mode: Mode) -> f32 {
    if !body.emissive {
        return 0.0;
    }
    let max_intensity = if mode == Mode::Galaxy { 10.0 } else { 6.0 };
    ((1.0 - brightness(body.color)) * max_intensity).max(2.0)
}
