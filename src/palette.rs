/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Named palette.
//!
//! Channel values are part of the public contract and must not be tuned.
use crate::Color;

// System Colors

pub const INFO_BLUE: Color = Color::from_rgb8(47, 112, 225);
pub const SUCCESS: Color = Color::from_rgb8(83, 215, 106);
pub const WARNING: Color = Color::from_rgb8(221, 170, 59);
pub const DANGER: Color = Color::from_rgb8(229, 0, 15);

// Whites

pub const ANTIQUE_WHITE: Color = Color::from_rgb8(250, 235, 215);
pub const OLD_LACE: Color = Color::from_rgb8(253, 245, 230);
pub const IVORY: Color = Color::from_rgb8(255, 255, 240);
pub const SEASHELL: Color = Color::from_rgb8(255, 245, 238);
pub const GHOST_WHITE: Color = Color::from_rgb8(248, 248, 255);
pub const SNOW: Color = Color::from_rgb8(255, 250, 250);
pub const LINEN: Color = Color::from_rgb8(250, 240, 230);

// Grays

pub const BLACK_25_PERCENT: Color = Color::gray(0.25, 1.);
pub const BLACK_50_PERCENT: Color = Color::gray(0.5, 1.);
pub const BLACK_75_PERCENT: Color = Color::gray(0.75, 1.);
pub const WARM_GRAY: Color = Color::from_rgb8(133, 117, 112);
pub const COOL_GRAY: Color = Color::from_rgb8(118, 122, 133);
pub const CHARCOAL: Color = Color::from_rgb8(34, 34, 34);

// Blues

pub const TEAL: Color = Color::from_rgb8(28, 160, 170);
pub const STEEL_BLUE: Color = Color::from_rgb8(103, 153, 170);
pub const ROBIN_EGG: Color = Color::from_rgb8(141, 218, 247);
pub const PASTEL_BLUE: Color = Color::from_rgb8(99, 161, 247);
pub const TURQUOISE: Color = Color::from_rgb8(112, 219, 219);
pub const SKY_BLUE: Color = Color::from_rgb8(0, 178, 238);
pub const INDIGO: Color = Color::from_rgb8(13, 79, 139);
pub const DENIM: Color = Color::from_rgb8(67, 114, 170);
pub const BLUEBERRY: Color = Color::from_rgb8(89, 113, 173);
pub const CORNFLOWER: Color = Color::from_rgb8(100, 149, 237);
pub const BABY_BLUE: Color = Color::from_rgb8(190, 220, 230);
pub const MIDNIGHT_BLUE: Color = Color::from_rgb8(13, 26, 35);
pub const FADED_BLUE: Color = Color::from_rgb8(23, 137, 155);
pub const ICEBERG: Color = Color::from_rgb8(200, 213, 219);
pub const WAVE: Color = Color::from_rgb8(102, 169, 251);

// Greens

pub const EMERALD: Color = Color::from_rgb8(1, 152, 117);
pub const GRASS: Color = Color::from_rgb8(99, 214, 74);
pub const PASTEL_GREEN: Color = Color::from_rgb8(126, 242, 124);
pub const SEAFOAM: Color = Color::from_rgb8(77, 226, 140);
pub const PALE_GREEN: Color = Color::from_rgb8(176, 226, 172);
pub const CACTUS_GREEN: Color = Color::from_rgb8(99, 111, 87);
pub const CHARTREUSE: Color = Color::from_rgb8(69, 139, 0);
pub const HOLLY_GREEN: Color = Color::from_rgb8(32, 87, 14);
pub const OLIVE: Color = Color::from_rgb8(91, 114, 34);
pub const OLIVE_DRAB: Color = Color::from_rgb8(107, 142, 35);
pub const MONEY_GREEN: Color = Color::from_rgb8(134, 198, 124);
pub const HONEYDEW: Color = Color::from_rgb8(216, 255, 231);
pub const LIME: Color = Color::from_rgb8(56, 237, 56);
pub const CARD_TABLE: Color = Color::from_rgb8(87, 121, 107);

// Reds

pub const SALMON: Color = Color::from_rgb8(233, 87, 95);
pub const BRICK_RED: Color = Color::from_rgb8(151, 27, 16);
pub const EASTER_PINK: Color = Color::from_rgb8(241, 167, 162);
pub const GRAPEFRUIT: Color = Color::from_rgb8(228, 31, 54);
pub const PINK: Color = Color::from_rgb8(255, 95, 154);
pub const INDIAN_RED: Color = Color::from_rgb8(205, 92, 92);
pub const STRAWBERRY: Color = Color::from_rgb8(190, 38, 37);
pub const CORAL: Color = Color::from_rgb8(240, 128, 128);
pub const MAROON: Color = Color::from_rgb8(80, 4, 28);
pub const WATERMELON: Color = Color::from_rgb8(242, 71, 63);
pub const TOMATO: Color = Color::from_rgb8(255, 99, 71);
pub const PINK_LIPSTICK: Color = Color::from_rgb8(255, 105, 180);
pub const PALE_ROSE: Color = Color::from_rgb8(255, 228, 225);
pub const CRIMSON: Color = Color::from_rgb8(187, 18, 36);

// Purples

pub const EGGPLANT: Color = Color::from_rgb8(105, 5, 98);
pub const PASTEL_PURPLE: Color = Color::from_rgb8(207, 100, 235);
pub const PALE_PURPLE: Color = Color::from_rgb8(229, 180, 235);
pub const COOL_PURPLE: Color = Color::from_rgb8(140, 93, 228);
pub const VIOLET: Color = Color::from_rgb8(191, 95, 255);
pub const PLUM: Color = Color::from_rgb8(139, 102, 139);
pub const LAVENDER: Color = Color::from_rgb8(204, 153, 204);
pub const RASPBERRY: Color = Color::from_rgb8(135, 38, 87);
pub const FUSCHIA: Color = Color::from_rgb8(255, 20, 147);
pub const GRAPE: Color = Color::from_rgb8(54, 11, 88);
pub const PERIWINKLE: Color = Color::from_rgb8(135, 159, 237);
pub const ORCHID: Color = Color::from_rgb8(218, 112, 214);

// Yellows

pub const GOLDENROD: Color = Color::from_rgb8(215, 170, 51);
pub const YELLOW_GREEN: Color = Color::from_rgb8(192, 242, 39);
pub const BANANA: Color = Color::from_rgb8(229, 227, 58);
pub const MUSTARD: Color = Color::from_rgb8(205, 171, 45);
pub const BUTTERMILK: Color = Color::from_rgb8(254, 241, 181);
pub const GOLD: Color = Color::from_rgb8(139, 117, 18);
pub const CREAM: Color = Color::from_rgb8(240, 226, 187);
pub const LIGHT_CREAM: Color = Color::from_rgb8(240, 238, 215);
pub const WHEAT: Color = Color::from_rgb8(240, 238, 215);
pub const BEIGE: Color = Color::from_rgb8(245, 245, 220);

// Oranges

pub const PEACH: Color = Color::from_rgb8(242, 187, 97);
pub const BURNT_ORANGE: Color = Color::from_rgb8(184, 102, 37);
pub const PASTEL_ORANGE: Color = Color::from_rgb8(248, 197, 143);
pub const CANTALOUPE: Color = Color::from_rgb8(250, 154, 79);
pub const CARROT: Color = Color::from_rgb8(237, 145, 33);
pub const MANDARIN: Color = Color::from_rgb8(247, 145, 55);

// Browns

pub const CHILI_POWDER: Color = Color::from_rgb8(199, 63, 23);
pub const BURNT_SIENNA: Color = Color::from_rgb8(138, 54, 15);
pub const CHOCOLATE: Color = Color::from_rgb8(94, 38, 5);
pub const COFFEE: Color = Color::from_rgb8(141, 60, 15);
pub const CINNAMON: Color = Color::from_rgb8(123, 63, 9);
pub const ALMOND: Color = Color::from_rgb8(196, 142, 72);
pub const EGGSHELL: Color = Color::from_rgb8(252, 230, 201);
pub const SAND: Color = Color::from_rgb8(222, 182, 151);
pub const MUD: Color = Color::from_rgb8(70, 45, 29);
pub const SIENNA: Color = Color::from_rgb8(160, 82, 45);
pub const DUST: Color = Color::from_rgb8(236, 214, 197);

/// Every named color, keyed by its camelCase name
pub const NAMED: &[(&str, Color)] = &[
    ("infoBlue", INFO_BLUE),
    ("success", SUCCESS),
    ("warning", WARNING),
    ("danger", DANGER),
    ("antiqueWhite", ANTIQUE_WHITE),
    ("oldLace", OLD_LACE),
    ("ivory", IVORY),
    ("seashell", SEASHELL),
    ("ghostWhite", GHOST_WHITE),
    ("snow", SNOW),
    ("linen", LINEN),
    ("black25Percent", BLACK_25_PERCENT),
    ("black50Percent", BLACK_50_PERCENT),
    ("black75Percent", BLACK_75_PERCENT),
    ("warmGray", WARM_GRAY),
    ("coolGray", COOL_GRAY),
    ("charcoal", CHARCOAL),
    ("teal", TEAL),
    ("steelBlue", STEEL_BLUE),
    ("robinEgg", ROBIN_EGG),
    ("pastelBlue", PASTEL_BLUE),
    ("turquoise", TURQUOISE),
    ("skyBlue", SKY_BLUE),
    ("indigo", INDIGO),
    ("denim", DENIM),
    ("blueberry", BLUEBERRY),
    ("cornflower", CORNFLOWER),
    ("babyBlue", BABY_BLUE),
    ("midnightBlue", MIDNIGHT_BLUE),
    ("fadedBlue", FADED_BLUE),
    ("iceberg", ICEBERG),
    ("wave", WAVE),
    ("emerald", EMERALD),
    ("grass", GRASS),
    ("pastelGreen", PASTEL_GREEN),
    ("seafoam", SEAFOAM),
    ("paleGreen", PALE_GREEN),
    ("cactusGreen", CACTUS_GREEN),
    ("chartreuse", CHARTREUSE),
    ("hollyGreen", HOLLY_GREEN),
    ("olive", OLIVE),
    ("oliveDrab", OLIVE_DRAB),
    ("moneyGreen", MONEY_GREEN),
    ("honeydew", HONEYDEW),
    ("lime", LIME),
    ("cardTable", CARD_TABLE),
    ("salmon", SALMON),
    ("brickRed", BRICK_RED),
    ("easterPink", EASTER_PINK),
    ("grapefruit", GRAPEFRUIT),
    ("pink", PINK),
    ("indianRed", INDIAN_RED),
    ("strawberry", STRAWBERRY),
    ("coral", CORAL),
    ("maroon", MAROON),
    ("watermelon", WATERMELON),
    ("tomato", TOMATO),
    ("pinkLipstick", PINK_LIPSTICK),
    ("paleRose", PALE_ROSE),
    ("crimson", CRIMSON),
    ("eggplant", EGGPLANT),
    ("pastelPurple", PASTEL_PURPLE),
    ("palePurple", PALE_PURPLE),
    ("coolPurple", COOL_PURPLE),
    ("violet", VIOLET),
    ("plum", PLUM),
    ("lavender", LAVENDER),
    ("raspberry", RASPBERRY),
    ("fuschia", FUSCHIA),
    ("grape", GRAPE),
    ("periwinkle", PERIWINKLE),
    ("orchid", ORCHID),
    ("goldenrod", GOLDENROD),
    ("yellowGreen", YELLOW_GREEN),
    ("banana", BANANA),
    ("mustard", MUSTARD),
    ("buttermilk", BUTTERMILK),
    ("gold", GOLD),
    ("cream", CREAM),
    ("lightCream", LIGHT_CREAM),
    ("wheat", WHEAT),
    ("beige", BEIGE),
    ("peach", PEACH),
    ("burntOrange", BURNT_ORANGE),
    ("pastelOrange", PASTEL_ORANGE),
    ("cantaloupe", CANTALOUPE),
    ("carrot", CARROT),
    ("mandarin", MANDARIN),
    ("chiliPowder", CHILI_POWDER),
    ("burntSienna", BURNT_SIENNA),
    ("chocolate", CHOCOLATE),
    ("coffee", COFFEE),
    ("cinnamon", CINNAMON),
    ("almond", ALMOND),
    ("eggshell", EGGSHELL),
    ("sand", SAND),
    ("mud", MUD),
    ("sienna", SIENNA),
    ("dust", DUST),
];

/// Looks up a palette color by its camelCase name, ignoring ASCII case
pub fn named(name: &str) -> Option<Color> {
    NAMED
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(named("teal"), Some(TEAL));
        assert_eq!(named("indianRed"), Some(INDIAN_RED));
        assert_eq!(named("INDIANRED"), Some(INDIAN_RED));
        assert_eq!(named("black50Percent"), Some(BLACK_50_PERCENT));
        assert_eq!(named("ultraviolet"), None);
    }

    #[test]
    fn literal_values() {
        assert_eq!(TEAL.to_hex_string(), "#1ca0aa");
        assert_eq!(CORAL.to_hex_string(), "#f08080");
        assert_eq!(INDIGO.to_hex_string(), "#0d4f8b");
        assert_eq!(DANGER.to_hex_string(), "#e5000f");
        assert_eq!(BLACK_25_PERCENT.to_rgba(), (0.25, 0.25, 0.25, 1.));
    }

    #[test]
    fn names_are_unique() {
        for (i, (a, _)) in NAMED.iter().enumerate() {
            for (b, _) in NAMED.iter().skip(i + 1) {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate {a}");
            }
        }
        assert_eq!(NAMED.len(), 99);
    }

    #[test]
    fn every_entry_resolves_in_any_case() {
        for (name, color) in NAMED {
            assert_eq!(named(name), Some(*color), "{name}");
            assert_eq!(named(&name.to_ascii_uppercase()), Some(*color), "{name}");
            assert_eq!(named(&name.to_ascii_lowercase()), Some(*color), "{name}");
        }
    }

    #[test]
    fn all_opaque() {
        assert!(NAMED.iter().all(|(_, c)| c.alpha() == 1.));
    }
}
