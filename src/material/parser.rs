//! MTL directive parsing.
//!
//! One directive per line, dispatched by the leading token. The parse
//! state (registry plus the material currently being filled) lives only
//! for the duration of [`parse`].

use std::collections::HashMap;
use std::sync::Arc;

use super::error::MtlError;
use super::types::{Material, TextureMap};
use super::MaterialLibrary;

/// Parse MTL text into a [`MaterialLibrary`].
pub(super) fn parse(data: &str) -> Result<MaterialLibrary, MtlError> {
    let mut ctx = ParseContext::new();

    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        // Non-empty line, so the directive token exists.
        let directive = tokens.next().unwrap_or_default();
        let tokens: Vec<&str> = tokens.collect();
        ctx.dispatch(directive, &tokens)?;
    }

    Ok(MaterialLibrary {
        materials: ctx.finish(),
    })
}

/// Numeric MTL tokens are not validated; garbage propagates as NaN.
fn float(token: &str) -> f32 {
    token.parse().unwrap_or(f32::NAN)
}

fn first<'a>(tokens: &[&'a str]) -> &'a str {
    tokens.first().copied().unwrap_or_default()
}

/// Parser-local state: the registry under construction and the current
/// material cursor. The cursor starts on a sentinel so property directives
/// before the first `newmtl` have somewhere harmless to land.
struct ParseContext {
    materials: HashMap<String, Arc<Material>>,
    current: Material,
    /// False while the cursor still points at the sentinel.
    retained: bool,
}

impl ParseContext {
    fn new() -> Self {
        Self {
            materials: HashMap::new(),
            current: Material::new("sentinel"),
            retained: false,
        }
    }

    /// Store the current material (unless it is the sentinel) and return
    /// the finished registry.
    fn finish(mut self) -> HashMap<String, Arc<Material>> {
        if self.retained {
            let material = std::mem::replace(&mut self.current, Material::new("sentinel"));
            self.materials
                .insert(material.name.clone(), Arc::new(material));
        }
        self.materials
    }

    /// The fixed directive table: one arm per known MTL directive.
    fn dispatch(&mut self, directive: &str, tokens: &[&str]) -> Result<(), MtlError> {
        match directive {
            "newmtl" => self.start_material(first(tokens)),
            "Ka" => self.current.ambient = parse_color(tokens)?,
            "Kd" => self.current.diffuse = parse_color(tokens)?,
            "Ks" => self.current.specular = parse_color(tokens)?,
            "Ke" => self.current.emissive = parse_color(tokens)?,
            "Tf" => self.current.transmission_filter = parse_color(tokens)?,
            // The optional -halo flag has no numeric effect; the factor is
            // the last token either way.
            "d" => self.current.dissolve = tokens.last().map(|t| float(t)).unwrap_or(0.0),
            "illum" => self.current.illumination = float(first(tokens)) as u32,
            "Ni" => self.current.refraction_index = float(first(tokens)),
            "Ns" => self.current.specular_exponent = float(first(tokens)),
            "sharpness" => self.current.sharpness = float(first(tokens)),
            "map_Ka" => self.current.map_ambient = parse_map(tokens),
            "map_Kd" => self.current.map_diffuse = parse_map(tokens),
            "map_Ks" => self.current.map_specular = parse_map(tokens),
            "map_Ke" => self.current.map_emissive = parse_map(tokens),
            "map_Ns" => self.current.map_specular_exponent = parse_map(tokens),
            "map_d" => self.current.map_dissolve = parse_map(tokens),
            "map_aat" => self.current.anti_aliasing = first(tokens) == "on",
            "map_bump" | "bump" => self.current.map_bump = parse_map(tokens),
            "disp" => self.current.map_displacement = parse_map(tokens),
            "decal" => self.current.map_decal = parse_map(tokens),
            "refl" => self.current.map_reflections.push(parse_map(tokens)),
            _ => {
                log::warn!("don't know how to parse the MTL directive: {directive:?}");
            }
        }
        Ok(())
    }

    fn start_material(&mut self, name: &str) {
        let previous = std::mem::replace(&mut self.current, Material::new(name));
        if self.retained {
            self.materials.insert(previous.name.clone(), Arc::new(previous));
        }
        self.retained = true;
    }
}

/// Parse a color directive's value tokens.
///
/// Either exactly three numeric tokens (r, g, b) or exactly one, which is
/// broadcast to all three channels. The `spectral` and `xyz` forms are
/// rejected.
fn parse_color(tokens: &[&str]) -> Result<[f32; 3], MtlError> {
    match first(tokens) {
        space @ ("spectral" | "xyz") => {
            return Err(MtlError::UnsupportedColorSpace {
                space: space.to_string(),
            })
        }
        _ => {}
    }
    if tokens.len() == 3 {
        return Ok([float(tokens[0]), float(tokens[1]), float(tokens[2])]);
    }
    let value = float(first(tokens));
    Ok([value, value, value])
}

/// Parse a texture-map line: a filename plus `-option value...` groups.
///
/// MTL puts the filename last, but at least one vendor writes it first.
/// Options always start with `-`, so a first token without the dash is
/// taken as the filename.
fn parse_map(tokens: &[&str]) -> TextureMap {
    if tokens.is_empty() {
        log::warn!("texture map directive without a filename");
        return TextureMap::default();
    }
    let (filename, option_tokens) = if !tokens[0].starts_with('-') {
        (tokens[0], &tokens[1..])
    } else {
        (tokens[tokens.len() - 1], &tokens[..tokens.len() - 1])
    };
    let mut map = parse_options(option_tokens);
    map.filename = filename.replace('\\', "/");
    map
}

/// Group `-option value...` tokens and apply each group to the option bag.
/// All tokens following an option up to the next `-`-prefixed token are
/// that option's values.
fn parse_options(tokens: &[&str]) -> TextureMap {
    let mut map = TextureMap::default();
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for token in tokens {
        if let Some(option) = token.strip_prefix('-') {
            groups.push((option, Vec::new()));
        } else if let Some((_, values)) = groups.last_mut() {
            values.push(token);
        }
    }

    for (option, values) in &groups {
        match *option {
            "cc" => map.color_correction = first(values) == "on",
            "blendu" => map.horizontal_blending = first(values) == "on",
            "blendv" => map.vertical_blending = first(values) == "on",
            "boost" => map.boost_mip_map_sharpness = float(first(values)),
            "mm" => {
                map.modify.brightness = float(first(values));
                map.modify.contrast = float(values.get(1).copied().unwrap_or_default());
            }
            "o" => map.offset = parse_uvw(values, 0.0),
            "s" => map.scale = parse_uvw(values, 1.0),
            "t" => map.turbulence = parse_uvw(values, 0.0),
            "texres" => map.texture_resolution = Some(float(first(values))),
            "clamp" => map.clamp = first(values) == "on",
            "bm" => map.bump_multiplier = float(first(values)),
            "imfchan" => map.imf_chan = Some(first(values).to_string()),
            "type" => map.reflection_type = Some(first(values).to_string()),
            _ => {
                log::warn!("don't know how to parse the texture option: -{option}");
            }
        }
    }

    map
}

/// Parse up to three values for the -o/-s/-t options, padding missing
/// components with the option's default.
fn parse_uvw(values: &[&str], default: f32) -> [f32; 3] {
    let mut uvw = [default; 3];
    for (slot, value) in uvw.iter_mut().zip(values.iter()) {
        *slot = float(value);
    }
    uvw
}
