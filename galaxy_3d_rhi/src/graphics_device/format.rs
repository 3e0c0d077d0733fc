/// Pixel / texel formats and their classification
///
/// Every value keeps the numeric identity of the matching `VkFormat`, so
/// backends can map by raw value.

use crate::error::Result;
use crate::graphics_device::ImageAspectFlags;

macro_rules! formats {
    ($($name:ident = $value:expr,)*) => {
        /// Pixel/texel encoding of an image or vertex attribute
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types)]
        #[repr(u32)]
        pub enum Format {
            $($name = $value,)*
        }

        impl Format {
            /// Every format, in ascending numeric order
            pub const ALL: &'static [Format] = &[$(Format::$name,)*];

            /// Canonical name (e.g. `"R8G8B8A8_UNORM"`)
            pub fn name(&self) -> &'static str {
                match self {
                    $(Format::$name => stringify!($name),)*
                }
            }

            /// Convert a raw `VkFormat`-compatible value
            ///
            /// Values outside the closed set are a configuration error.
            pub fn from_raw(value: u32) -> Result<Format> {
                match value {
                    $(v if v == $value => Ok(Format::$name),)*
                    other => Err(crate::engine_err!("galaxy3d::rhi::Format",
                        InvalidEnumValue => "{} is not a Format value", other)),
                }
            }
        }
    };
}

formats! {
    UNDEFINED = 0,
    R4G4_UNORM_PACK8 = 1,
    R4G4B4A4_UNORM_PACK16 = 2,
    B4G4R4A4_UNORM_PACK16 = 3,
    R5G6B5_UNORM_PACK16 = 4,
    B5G6R5_UNORM_PACK16 = 5,
    R5G5B5A1_UNORM_PACK16 = 6,
    B5G5R5A1_UNORM_PACK16 = 7,
    A1R5G5B5_UNORM_PACK16 = 8,
    R8_UNORM = 9,
    R8_SNORM = 10,
    R8_USCALED = 11,
    R8_SSCALED = 12,
    R8_UINT = 13,
    R8_SINT = 14,
    R8_SRGB = 15,
    R8G8_UNORM = 16,
    R8G8_SNORM = 17,
    R8G8_USCALED = 18,
    R8G8_SSCALED = 19,
    R8G8_UINT = 20,
    R8G8_SINT = 21,
    R8G8_SRGB = 22,
    R8G8B8_UNORM = 23,
    R8G8B8_SNORM = 24,
    R8G8B8_USCALED = 25,
    R8G8B8_SSCALED = 26,
    R8G8B8_UINT = 27,
    R8G8B8_SINT = 28,
    R8G8B8_SRGB = 29,
    B8G8R8_UNORM = 30,
    B8G8R8_SNORM = 31,
    B8G8R8_USCALED = 32,
    B8G8R8_SSCALED = 33,
    B8G8R8_UINT = 34,
    B8G8R8_SINT = 35,
    B8G8R8_SRGB = 36,
    R8G8B8A8_UNORM = 37,
    R8G8B8A8_SNORM = 38,
    R8G8B8A8_USCALED = 39,
    R8G8B8A8_SSCALED = 40,
    R8G8B8A8_UINT = 41,
    R8G8B8A8_SINT = 42,
    R8G8B8A8_SRGB = 43,
    B8G8R8A8_UNORM = 44,
    B8G8R8A8_SNORM = 45,
    B8G8R8A8_USCALED = 46,
    B8G8R8A8_SSCALED = 47,
    B8G8R8A8_UINT = 48,
    B8G8R8A8_SINT = 49,
    B8G8R8A8_SRGB = 50,
    A8B8G8R8_UNORM_PACK32 = 51,
    A8B8G8R8_SNORM_PACK32 = 52,
    A8B8G8R8_USCALED_PACK32 = 53,
    A8B8G8R8_SSCALED_PACK32 = 54,
    A8B8G8R8_UINT_PACK32 = 55,
    A8B8G8R8_SINT_PACK32 = 56,
    A8B8G8R8_SRGB_PACK32 = 57,
    A2R10G10B10_UNORM_PACK32 = 58,
    A2R10G10B10_SNORM_PACK32 = 59,
    A2R10G10B10_USCALED_PACK32 = 60,
    A2R10G10B10_SSCALED_PACK32 = 61,
    A2R10G10B10_UINT_PACK32 = 62,
    A2R10G10B10_SINT_PACK32 = 63,
    A2B10G10R10_UNORM_PACK32 = 64,
    A2B10G10R10_SNORM_PACK32 = 65,
    A2B10G10R10_USCALED_PACK32 = 66,
    A2B10G10R10_SSCALED_PACK32 = 67,
    A2B10G10R10_UINT_PACK32 = 68,
    A2B10G10R10_SINT_PACK32 = 69,
    R16_UNORM = 70,
    R16_SNORM = 71,
    R16_USCALED = 72,
    R16_SSCALED = 73,
    R16_UINT = 74,
    R16_SINT = 75,
    R16_SFLOAT = 76,
    R16G16_UNORM = 77,
    R16G16_SNORM = 78,
    R16G16_USCALED = 79,
    R16G16_SSCALED = 80,
    R16G16_UINT = 81,
    R16G16_SINT = 82,
    R16G16_SFLOAT = 83,
    R16G16B16_UNORM = 84,
    R16G16B16_SNORM = 85,
    R16G16B16_USCALED = 86,
    R16G16B16_SSCALED = 87,
    R16G16B16_UINT = 88,
    R16G16B16_SINT = 89,
    R16G16B16_SFLOAT = 90,
    R16G16B16A16_UNORM = 91,
    R16G16B16A16_SNORM = 92,
    R16G16B16A16_USCALED = 93,
    R16G16B16A16_SSCALED = 94,
    R16G16B16A16_UINT = 95,
    R16G16B16A16_SINT = 96,
    R16G16B16A16_SFLOAT = 97,
    R32_UINT = 98,
    R32_SINT = 99,
    R32_SFLOAT = 100,
    R32G32_UINT = 101,
    R32G32_SINT = 102,
    R32G32_SFLOAT = 103,
    R32G32B32_UINT = 104,
    R32G32B32_SINT = 105,
    R32G32B32_SFLOAT = 106,
    R32G32B32A32_UINT = 107,
    R32G32B32A32_SINT = 108,
    R32G32B32A32_SFLOAT = 109,
    R64_UINT = 110,
    R64_SINT = 111,
    R64_SFLOAT = 112,
    R64G64_UINT = 113,
    R64G64_SINT = 114,
    R64G64_SFLOAT = 115,
    R64G64B64_UINT = 116,
    R64G64B64_SINT = 117,
    R64G64B64_SFLOAT = 118,
    R64G64B64A64_UINT = 119,
    R64G64B64A64_SINT = 120,
    R64G64B64A64_SFLOAT = 121,
    B10G11R11_UFLOAT_PACK32 = 122,
    E5B9G9R9_UFLOAT_PACK32 = 123,
    D16_UNORM = 124,
    X8_D24_UNORM_PACK32 = 125,
    D32_SFLOAT = 126,
    S8_UINT = 127,
    D16_UNORM_S8_UINT = 128,
    D24_UNORM_S8_UINT = 129,
    D32_SFLOAT_S8_UINT = 130,
    BC1_RGB_UNORM_BLOCK = 131,
    BC1_RGB_SRGB_BLOCK = 132,
    BC1_RGBA_UNORM_BLOCK = 133,
    BC1_RGBA_SRGB_BLOCK = 134,
    BC2_UNORM_BLOCK = 135,
    BC2_SRGB_BLOCK = 136,
    BC3_UNORM_BLOCK = 137,
    BC3_SRGB_BLOCK = 138,
    BC4_UNORM_BLOCK = 139,
    BC4_SNORM_BLOCK = 140,
    BC5_UNORM_BLOCK = 141,
    BC5_SNORM_BLOCK = 142,
    BC6H_UFLOAT_BLOCK = 143,
    BC6H_SFLOAT_BLOCK = 144,
    BC7_UNORM_BLOCK = 145,
    BC7_SRGB_BLOCK = 146,
    ETC2_R8G8B8_UNORM_BLOCK = 147,
    ETC2_R8G8B8_SRGB_BLOCK = 148,
    ETC2_R8G8B8A1_UNORM_BLOCK = 149,
    ETC2_R8G8B8A1_SRGB_BLOCK = 150,
    ETC2_R8G8B8A8_UNORM_BLOCK = 151,
    ETC2_R8G8B8A8_SRGB_BLOCK = 152,
    EAC_R11_UNORM_BLOCK = 153,
    EAC_R11_SNORM_BLOCK = 154,
    EAC_R11G11_UNORM_BLOCK = 155,
    EAC_R11G11_SNORM_BLOCK = 156,
    ASTC_4x4_UNORM_BLOCK = 157,
    ASTC_4x4_SRGB_BLOCK = 158,
    ASTC_5x4_UNORM_BLOCK = 159,
    ASTC_5x4_SRGB_BLOCK = 160,
    ASTC_5x5_UNORM_BLOCK = 161,
    ASTC_5x5_SRGB_BLOCK = 162,
    ASTC_6x5_UNORM_BLOCK = 163,
    ASTC_6x5_SRGB_BLOCK = 164,
    ASTC_6x6_UNORM_BLOCK = 165,
    ASTC_6x6_SRGB_BLOCK = 166,
    ASTC_8x5_UNORM_BLOCK = 167,
    ASTC_8x5_SRGB_BLOCK = 168,
    ASTC_8x6_UNORM_BLOCK = 169,
    ASTC_8x6_SRGB_BLOCK = 170,
    ASTC_8x8_UNORM_BLOCK = 171,
    ASTC_8x8_SRGB_BLOCK = 172,
    ASTC_10x5_UNORM_BLOCK = 173,
    ASTC_10x5_SRGB_BLOCK = 174,
    ASTC_10x6_UNORM_BLOCK = 175,
    ASTC_10x6_SRGB_BLOCK = 176,
    ASTC_10x8_UNORM_BLOCK = 177,
    ASTC_10x8_SRGB_BLOCK = 178,
    ASTC_10x10_UNORM_BLOCK = 179,
    ASTC_10x10_SRGB_BLOCK = 180,
    ASTC_12x10_UNORM_BLOCK = 181,
    ASTC_12x10_SRGB_BLOCK = 182,
    ASTC_12x12_UNORM_BLOCK = 183,
    ASTC_12x12_SRGB_BLOCK = 184,
}

impl Format {
    /// Raw numeric identity (equal to the matching `VkFormat`)
    pub fn as_raw(&self) -> u32 {
        *self as u32
    }

    /// Block-compressed formats occupy one contiguous range (BC1 to ASTC 12x12)
    pub fn is_compressed_format(&self) -> bool {
        (Format::BC1_RGB_UNORM_BLOCK..=Format::ASTC_12x12_SRGB_BLOCK).contains(self)
    }

    /// Formats carrying a depth component
    pub fn is_depth_format(&self) -> bool {
        matches!(
            self,
            Format::D16_UNORM
                | Format::X8_D24_UNORM_PACK32
                | Format::D32_SFLOAT
                | Format::D16_UNORM_S8_UINT
                | Format::D24_UNORM_S8_UINT
                | Format::D32_SFLOAT_S8_UINT
        )
    }

    /// Formats carrying a stencil component
    pub fn is_stencil_format(&self) -> bool {
        matches!(
            self,
            Format::S8_UINT
                | Format::D16_UNORM_S8_UINT
                | Format::D24_UNORM_S8_UINT
                | Format::D32_SFLOAT_S8_UINT
        )
    }

    /// Formats carrying both depth and stencil
    pub fn is_depth_stencil_format(&self) -> bool {
        self.is_depth_format() && self.is_stencil_format()
    }

    /// Formats carrying depth, stencil, or both
    pub fn is_depth_or_stencil_format(&self) -> bool {
        self.is_depth_format() || self.is_stencil_format()
    }

    /// Image aspects covered by this format
    pub fn aspect_mask(&self) -> ImageAspectFlags {
        let mut mask = ImageAspectFlags::empty();
        if self.is_depth_format() {
            mask |= ImageAspectFlags::DEPTH;
        }
        if self.is_stencil_format() {
            mask |= ImageAspectFlags::STENCIL;
        }
        if mask.is_empty() {
            mask = ImageAspectFlags::COLOUR;
        }
        mask
    }

    /// Size in bytes of one texel
    ///
    /// `UNDEFINED` has size 0. Block-compressed formats have no per-texel
    /// size and return `Error::UnsupportedFormat`.
    pub fn size(&self) -> Result<u32> {
        if self.is_compressed_format() {
            crate::engine_bail!("galaxy3d::rhi::Format",
                UnsupportedFormat => "{} is block-compressed and has no texel size", self.name());
        }

        let size = match self.as_raw() {
            0 => 0,
            1 => 1,
            2..=8 => 2,
            9..=15 => 1,
            16..=22 => 2,
            23..=36 => 3,
            37..=69 => 4,
            70..=76 => 2,
            77..=83 => 4,
            84..=90 => 6,
            91..=97 => 8,
            98..=100 => 4,
            101..=103 => 8,
            104..=106 => 12,
            107..=109 => 16,
            110..=112 => 8,
            113..=115 => 16,
            116..=118 => 24,
            119..=121 => 32,
            // B10G11R11, E5B9G9R9
            122 | 123 => 4,
            124 => 2,
            125 | 126 => 4,
            127 => 1,
            128 => 3,
            129 => 4,
            // 32-bit depth + 8-bit stencil, unpadded
            130 => 5,
            other => crate::engine_bail!("galaxy3d::rhi::Format",
                InvalidEnumValue => "no texel size known for format value {}", other),
        };
        Ok(size)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
