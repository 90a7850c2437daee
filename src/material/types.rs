//! Material data types.
//!
//! Field names follow the MTL directives they come from; the per-slot
//! texture descriptors carry the option bag a `map_*` line can specify.

/// Brightness/contrast modifiers from the `-mm` texture option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureModify {
    /// Base gain added to texture values.
    pub brightness: f32,
    /// Gain multiplier applied to texture values.
    pub contrast: f32,
}

impl Default for TextureModify {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
        }
    }
}

/// One texture-map descriptor: a filename plus its option bag.
///
/// Produced by the `map_*`, `bump`, `disp`, `decal`, and `refl` directives.
/// Defaults match an option-less map line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMap {
    /// Image filename, with backslashes normalized to forward slashes.
    /// Empty when the slot was never set.
    pub filename: String,
    /// `-cc on` — apply color correction.
    pub color_correction: bool,
    /// `-blendu` — blend horizontally (on by default).
    pub horizontal_blending: bool,
    /// `-blendv` — blend vertically (on by default).
    pub vertical_blending: bool,
    /// `-boost` — mip-map sharpness boost.
    pub boost_mip_map_sharpness: f32,
    /// `-mm` — brightness/contrast modifiers.
    pub modify: TextureModify,
    /// `-o u v w` — texture offset.
    pub offset: [f32; 3],
    /// `-s u v w` — texture scale.
    pub scale: [f32; 3],
    /// `-t u v w` — turbulence.
    pub turbulence: [f32; 3],
    /// `-clamp on` — clamp texels to [0, 1].
    pub clamp: bool,
    /// `-texres` — texture resolution override.
    pub texture_resolution: Option<f32>,
    /// `-bm` — bump multiplier.
    pub bump_multiplier: f32,
    /// `-imfchan` — channel used to create a scalar texture (r, g, b, m, l, z).
    pub imf_chan: Option<String>,
    /// `-type` — reflection map type (only meaningful on `refl` maps).
    pub reflection_type: Option<String>,
}

impl Default for TextureMap {
    fn default() -> Self {
        Self {
            filename: String::new(),
            color_correction: false,
            horizontal_blending: true,
            vertical_blending: true,
            boost_mip_map_sharpness: 0.0,
            modify: TextureModify::default(),
            offset: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            turbulence: [0.0, 0.0, 0.0],
            clamp: false,
            texture_resolution: None,
            bump_multiplier: 1.0,
            imf_chan: None,
            reflection_type: None,
        }
    }
}

impl TextureMap {
    /// Whether this slot was actually set by a map directive.
    pub fn is_set(&self) -> bool {
        !self.filename.is_empty()
    }
}

/// One parsed MTL material record.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The `newmtl` name.
    pub name: String,
    /// Ka — ambient reflectivity.
    pub ambient: [f32; 3],
    /// Kd — diffuse reflectivity.
    pub diffuse: [f32; 3],
    /// Ks — specular reflectivity.
    pub specular: [f32; 3],
    /// Ke — emissive color.
    pub emissive: [f32; 3],
    /// Tf — transmission filter.
    pub transmission_filter: [f32; 3],
    /// d — dissolve factor.
    pub dissolve: f32,
    /// Ns — specular exponent, normally 0 to 1000.
    pub specular_exponent: f32,
    /// Tr — transparency (normalized).
    pub transparency: f32,
    /// illum — illumination model id, 0 to 10.
    pub illumination: u32,
    /// Ni — optical density. 1.0 is air.
    pub refraction_index: f32,
    /// sharpness — reflection sharpness, 0 to 1000.
    pub sharpness: f32,
    /// map_Kd.
    pub map_diffuse: TextureMap,
    /// map_Ka.
    pub map_ambient: TextureMap,
    /// map_Ks.
    pub map_specular: TextureMap,
    /// map_Ns.
    pub map_specular_exponent: TextureMap,
    /// map_d.
    pub map_dissolve: TextureMap,
    /// map_aat — anti-aliasing of this material's textures.
    pub anti_aliasing: bool,
    /// map_bump or bump.
    pub map_bump: TextureMap,
    /// disp.
    pub map_displacement: TextureMap,
    /// decal.
    pub map_decal: TextureMap,
    /// map_Ke.
    pub map_emissive: TextureMap,
    /// refl — one entry per directive. A cube reflection uses one entry per
    /// face; a spherical reflection should only ever have one.
    pub map_reflections: Vec<TextureMap>,
}

impl Material {
    /// Create a material with MTL defaults and the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ambient: [0.0; 3],
            diffuse: [0.0; 3],
            specular: [0.0; 3],
            emissive: [0.0; 3],
            transmission_filter: [0.0; 3],
            dissolve: 0.0,
            specular_exponent: 0.0,
            transparency: 0.0,
            illumination: 0,
            refraction_index: 1.0,
            sharpness: 0.0,
            map_diffuse: TextureMap::default(),
            map_ambient: TextureMap::default(),
            map_specular: TextureMap::default(),
            map_specular_exponent: TextureMap::default(),
            map_dissolve: TextureMap::default(),
            anti_aliasing: false,
            map_bump: TextureMap::default(),
            map_displacement: TextureMap::default(),
            map_decal: TextureMap::default(),
            map_emissive: TextureMap::default(),
            map_reflections: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let material = Material::new("default");
        assert_eq!(material.refraction_index, 1.0);
        assert_eq!(material.diffuse, [0.0, 0.0, 0.0]);
        assert!(!material.map_diffuse.is_set());
        assert!(material.map_reflections.is_empty());
    }

    #[test]
    fn test_texture_map_defaults() {
        let map = TextureMap::default();
        assert!(map.horizontal_blending);
        assert!(map.vertical_blending);
        assert_eq!(map.scale, [1.0, 1.0, 1.0]);
        assert_eq!(map.modify.contrast, 1.0);
        assert_eq!(map.bump_multiplier, 1.0);
        assert!(map.texture_resolution.is_none());
    }
}
