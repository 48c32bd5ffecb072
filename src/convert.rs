//! Conversions between a [`Color`] and every supported color space.
//!
//! Each space is modeled with its own record in [`crate::models`]. The
//! conversion paths all go through linear light sRGB and CIE-XYZ:
//!
//! ```text
//! sRGB ── HSV, HSL
//!   │
//! linear sRGB ── XYZ ── xyY
//!                 ├── Lab ── HCL
//!                 └── Luv ── LCh ── HSLuv, HPLuv
//! ```
//!
//! Conversions that depend on a white point have a `*_white_ref` variant;
//! the plain variant uses [`WhiteReference::D65`]. No chromatic adaptation
//! is done, another white only changes the normalization. HSLuv and HPLuv
//! use their own published matrix and white.
//!
//! ```rust
//! use tonal::Color;
//! let orange = Color::from_hex("#d2691e").unwrap();
//! let hcl = orange.hcl();
//! assert!(hcl.hue >= 0.0 && hcl.hue < 360.0);
//! ```

use crate::{
    color::{Color, Components, Space},
    models::{
        rgb::{delinearize, delinearize_fast, linearize, linearize_fast},
        Hcl, Hsl, Hsluv, Hsv, Lab, Lch, LinearRgb, Luv, WhiteReference, Xyy, Xyz,
    },
};

impl Color {
    /// Decode the gamma to get linear light RGB.
    pub fn linear_rgb(&self) -> LinearRgb {
        Components(self.red, self.green, self.blue)
            .map(linearize)
            .into()
    }

    /// Like [`Color::linear_rgb`] but with a polynomial approximation of the
    /// transfer function. Only accurate for components in [0, 1].
    pub fn linear_rgb_fast(&self) -> LinearRgb {
        Components(self.red, self.green, self.blue)
            .map(linearize_fast)
            .into()
    }

    /// Create a color from linear light RGB.
    pub fn from_linear_rgb(linear: LinearRgb) -> Self {
        linear.to_components().map(delinearize).into()
    }

    /// Like [`Color::from_linear_rgb`] but with a polynomial approximation of
    /// the transfer function. Only accurate for components in [0, 1].
    pub fn from_linear_rgb_fast(linear: LinearRgb) -> Self {
        linear.to_components().map(delinearize_fast).into()
    }

    /// Convert to CIE-XYZ.
    pub fn xyz(&self) -> Xyz {
        self.linear_rgb().to_xyz()
    }

    /// Create a color from CIE-XYZ. The result is not clamped.
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_linear_rgb(xyz.to_linear_rgb())
    }

    /// Convert to CIE-xyY. Black takes the chromaticity of D65.
    pub fn xyy(&self) -> Xyy {
        self.xyy_white_ref(&WhiteReference::D65)
    }

    /// Convert to CIE-xyY. Black takes the chromaticity of `white`.
    pub fn xyy_white_ref(&self, white: &WhiteReference) -> Xyy {
        self.xyz().to_xyy(white)
    }

    /// Create a color from CIE-xyY.
    pub fn from_xyy(xyy: Xyy) -> Self {
        Self::from_xyz(xyy.to_xyz())
    }

    /// Convert to CIE-Lab relative to D65.
    pub fn lab(&self) -> Lab {
        self.lab_white_ref(&WhiteReference::D65)
    }

    /// Convert to CIE-Lab relative to `white`.
    pub fn lab_white_ref(&self, white: &WhiteReference) -> Lab {
        self.xyz().to_lab(white)
    }

    /// Create a color from CIE-Lab relative to D65.
    pub fn from_lab(lab: Lab) -> Self {
        Self::from_lab_white_ref(lab, &WhiteReference::D65)
    }

    /// Create a color from CIE-Lab relative to `white`.
    pub fn from_lab_white_ref(lab: Lab, white: &WhiteReference) -> Self {
        Self::from_xyz(lab.to_xyz(white))
    }

    /// Convert to CIE-Luv relative to D65.
    pub fn luv(&self) -> Luv {
        self.luv_white_ref(&WhiteReference::D65)
    }

    /// Convert to CIE-Luv relative to `white`.
    pub fn luv_white_ref(&self, white: &WhiteReference) -> Luv {
        self.xyz().to_luv(white)
    }

    /// Create a color from CIE-Luv relative to D65.
    pub fn from_luv(luv: Luv) -> Self {
        Self::from_luv_white_ref(luv, &WhiteReference::D65)
    }

    /// Create a color from CIE-Luv relative to `white`.
    pub fn from_luv_white_ref(luv: Luv, white: &WhiteReference) -> Self {
        Self::from_xyz(luv.to_xyz(white))
    }

    /// Convert to HCL, the polar form of CIE-Lab, relative to D65.
    pub fn hcl(&self) -> Hcl {
        self.hcl_white_ref(&WhiteReference::D65)
    }

    /// Convert to HCL relative to `white`.
    pub fn hcl_white_ref(&self, white: &WhiteReference) -> Hcl {
        self.lab_white_ref(white).to_hcl()
    }

    /// Create a color from HCL relative to D65.
    pub fn from_hcl(hcl: Hcl) -> Self {
        Self::from_hcl_white_ref(hcl, &WhiteReference::D65)
    }

    /// Create a color from HCL relative to `white`.
    pub fn from_hcl_white_ref(hcl: Hcl, white: &WhiteReference) -> Self {
        Self::from_lab_white_ref(hcl.to_lab(), white)
    }

    /// Convert to LCh, the polar form of CIE-Luv, relative to D65.
    pub fn lch(&self) -> Lch {
        self.lch_white_ref(&WhiteReference::D65)
    }

    /// Convert to LCh relative to `white`.
    pub fn lch_white_ref(&self, white: &WhiteReference) -> Lch {
        self.luv_white_ref(white).to_lch()
    }

    /// Create a color from LCh relative to D65.
    pub fn from_lch(lch: Lch) -> Self {
        Self::from_lch_white_ref(lch, &WhiteReference::D65)
    }

    /// Create a color from LCh relative to `white`.
    pub fn from_lch_white_ref(lch: Lch, white: &WhiteReference) -> Self {
        Self::from_luv_white_ref(lch.to_luv(), white)
    }

    /// Convert to the HSV notation.
    pub fn hsv(&self) -> Hsv {
        Hsv::from_rgb(&self.to_components())
    }

    /// Create a color from the HSV notation.
    pub fn from_hsv(hsv: Hsv) -> Self {
        hsv.to_rgb().into()
    }

    /// Convert to the HSL notation.
    pub fn hsl(&self) -> Hsl {
        Hsl::from_rgb(&self.to_components())
    }

    /// Create a color from the HSL notation.
    pub fn from_hsl(hsl: Hsl) -> Self {
        hsl.to_rgb().into()
    }

    /// LCh(uv) against the HSLuv white, through the HSLuv matrix.
    fn hsluv_lch(&self) -> Lch {
        self.linear_rgb()
            .to_xyz_hsluv()
            .to_luv(&WhiteReference::HSLUV_D65)
            .to_lch()
    }

    /// The inverse of [`Color::hsluv_lch`], clamped into [0, 1].
    fn from_hsluv_lch(lch: Lch) -> Self {
        let linear = lch
            .to_luv()
            .to_xyz(&WhiteReference::HSLUV_D65)
            .to_linear_rgb_hsluv();
        Self::from_linear_rgb(linear).clamped()
    }

    /// Convert to HSLuv. Saturation and lightness are in [0, 1].
    pub fn hsluv(&self) -> Hsluv {
        self.hsluv_lch().to_hsluv()
    }

    /// Create a color from HSLuv, clamped into [0, 1].
    pub fn from_hsluv(hsluv: Hsluv) -> Self {
        Self::from_hsluv_lch(hsluv.to_lch())
    }

    /// Convert to HPLuv. Lightness is in [0, 1], saturation can exceed 1.
    pub fn hpluv(&self) -> Hsluv {
        self.hsluv_lch().to_hpluv()
    }

    /// Create a color from HPLuv, clamped into [0, 1].
    pub fn from_hpluv(hpluv: Hsluv) -> Self {
        Self::from_hsluv_lch(hpluv.hpluv_to_lch())
    }

    /// The components of this color in `space`, in the field order of that
    /// space's record.
    pub fn components_in(&self, space: Space) -> Components {
        match space {
            Space::Srgb => self.to_components(),
            Space::SrgbLinear => self.linear_rgb().to_components(),
            Space::Hsv => self.hsv().to_components(),
            Space::Hsl => self.hsl().to_components(),
            Space::Xyz => self.xyz().to_components(),
            Space::Xyy => self.xyy().to_components(),
            Space::Lab => self.lab().to_components(),
            Space::Luv => self.luv().to_components(),
            Space::Hcl => self.hcl().to_components(),
            Space::Lch => self.lch().to_components(),
            Space::Hsluv => self.hsluv().to_components(),
            Space::Hpluv => self.hpluv().to_components(),
        }
    }

    /// Create a color from `components` in `space`, the inverse of
    /// [`Color::components_in`].
    pub fn from_components_in(space: Space, components: Components) -> Self {
        match space {
            Space::Srgb => components.into(),
            Space::SrgbLinear => Self::from_linear_rgb(components.into()),
            Space::Hsv => Self::from_hsv(components.into()),
            Space::Hsl => Self::from_hsl(components.into()),
            Space::Xyz => Self::from_xyz(components.into()),
            Space::Xyy => Self::from_xyy(components.into()),
            Space::Lab => Self::from_lab(components.into()),
            Space::Luv => Self::from_luv(components.into()),
            Space::Hcl => Self::from_hcl(components.into()),
            Space::Lch => Self::from_lch(components.into()),
            Space::Hsluv => Self::from_hsluv(components.into()),
            Space::Hpluv => Self::from_hpluv(components.into()),
        }
    }
}
