use moin_tokens::{Color, ColorPalette, ColorScheme, PresetColor, BASE_LEVEL, PALETTE_LEVELS};

fn lightness(color: Color) -> f32 {
    color.relative_luminance()
}

/// Seeds on a 7x7x7 RGB grid, corners and primaries included
fn seed_grid() -> Vec<Color> {
    let steps: Vec<f32> = (0..=6).map(|i| i as f32 / 6.0).collect();
    let mut seeds = Vec::new();
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                seeds.push(Color::rgb(r, g, b));
            }
        }
    }
    seeds.extend([
        Color::rgb(0.98, 0.98, 0.0),
        Color::rgb(0.98, 0.98, 0.5),
        Color::rgb(0.0, 0.0, 0.02),
        Color::rgb(0.02, 0.0, 0.0),
        Color::rgb(1.0, 0.84, 0.0),
    ]);
    seeds
}

fn assert_ordered(seed: Color, palette: &ColorPalette) {
    let epsilon = 1e-5;
    for level in 1..PALETTE_LEVELS {
        let (a, b) = (lightness(palette.level(level)), lightness(palette.level(level + 1)));
        let ok = match palette.scheme() {
            ColorScheme::Light => a + epsilon >= b,
            ColorScheme::Dark => a <= b + epsilon,
        };
        assert!(
            ok,
            "seed {:?} {:?} levels {} and {} out of order ({} vs {})",
            seed,
            palette.scheme(),
            level,
            level + 1,
            a,
            b
        );
    }
}

fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn generation_is_deterministic() {
    for preset in PresetColor::all() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(
                preset.palette(scheme),
                preset.palette(scheme),
                "Preset {:?} should give the same {:?} palette twice",
                preset,
                scheme
            );
        }
    }
}

#[test]
fn every_level_is_in_gamut() {
    for preset in PresetColor::all() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let palette = preset.palette(scheme);
            assert_eq!(palette.colors().len(), PALETTE_LEVELS);
            for (i, color) in palette.colors().iter().enumerate() {
                assert!(
                    color.is_in_gamut(),
                    "{:?} level {} out of gamut in {:?}: {:?}",
                    preset,
                    i + 1,
                    scheme,
                    color
                );
            }
        }
    }
}

#[test]
fn light_scales_darken_and_dark_scales_brighten() {
    let epsilon = 1e-3;
    for preset in PresetColor::all() {
        let light = preset.palette(ColorScheme::Light);
        let dark = preset.palette(ColorScheme::Dark);
        for level in 1..PALETTE_LEVELS {
            assert!(
                lightness(light.level(level)) + epsilon >= lightness(light.level(level + 1)),
                "{:?} light level {} should not be darker than level {}",
                preset,
                level,
                level + 1
            );
            assert!(
                lightness(dark.level(level)) <= lightness(dark.level(level + 1)) + epsilon,
                "{:?} dark level {} should not be brighter than level {}",
                preset,
                level,
                level + 1
            );
        }
    }
}

#[test]
fn light_base_is_the_preset_color() {
    for preset in PresetColor::all() {
        let palette = preset.palette(ColorScheme::Light);
        assert_eq!(palette.level(BASE_LEVEL), preset.color());
    }
}

#[test]
fn dark_first_level_is_distinguishable_from_the_canvas() {
    let canvas = ColorPalette::default_background(ColorScheme::Dark);
    for preset in PresetColor::all() {
        let palette = preset.palette(ColorScheme::Dark);
        assert_ne!(palette.level(1), canvas, "{:?}", preset);
    }
}

#[test]
fn any_seed_gives_an_ordered_scale_in_gamut() {
    for seed in seed_grid() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let palette =
                ColorPalette::generate(seed, scheme, ColorPalette::default_background(scheme));
            for (i, color) in palette.colors().iter().enumerate() {
                assert!(
                    color.is_in_gamut(),
                    "seed {:?} level {} out of gamut in {:?}: {:?}",
                    seed,
                    i + 1,
                    scheme,
                    color
                );
            }
            assert_ordered(seed, &palette);
        }
    }
}

#[test]
fn extreme_seeds_are_handled() {
    let seeds = [
        Color::BLACK,
        Color::WHITE,
        Color::rgb(1.0, 0.0, 0.0),
        Color::rgb(0.0, 1.0, 0.0),
        Color::rgb(0.0, 0.0, 1.0),
        Color::rgb(1.0, 1.0, 0.0),
        Color::rgb(0.0, 1.0, 1.0),
        Color::rgb(1.0, 0.0, 1.0),
    ];
    for seed in seeds {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let palette =
                ColorPalette::generate(seed, scheme, ColorPalette::default_background(scheme));
            for color in palette.colors() {
                assert!(
                    [color.r, color.g, color.b, color.a].iter().all(|c| c.is_finite()),
                    "seed {:?} produced {:?} in {:?}",
                    seed,
                    color,
                    scheme
                );
            }
            assert_ordered(seed, &palette);
        }
        assert_eq!(
            ColorPalette::generate(seed, ColorScheme::Light, Color::WHITE).base(),
            seed
        );
    }
}

#[test]
fn base_keeps_the_seed_hue() {
    for seed in seed_grid() {
        let hsv = seed.to_hsv();
        if hsv.s < 0.2 || hsv.v < 0.2 {
            continue;
        }
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let base = ColorPalette::generate(seed, scheme, ColorPalette::default_background(scheme))
                .base();
            let distance = hue_distance(base.to_hsv().h, hsv.h);
            assert!(
                distance <= 3.0,
                "seed {:?} base {:?} drifted {} degrees in {:?}",
                seed,
                base,
                distance,
                scheme
            );
        }
    }
}
