//! The great O Antiphons of the last eight days of Advent.

use cc_time::{Date, Month};

/// One of the O Antiphons, said with the Magnificat on its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OAntiphon {
    /// Day of December, 16–23.
    pub day: u8,
    /// Suffix added to the day's name, e.g. `"(O Adonai / O Lord of Might)"`.
    pub subtitle: &'static str,
    /// The Latin text.
    pub latin: &'static str,
    /// An English rendering.
    pub english: &'static str,
    /// Scripture the antiphon draws on.
    pub citation: &'static str,
}

const ANTIPHONS: [OAntiphon; 8] = [
    OAntiphon {
        day: 16,
        subtitle: "(O Sapientia / O Wisdom)",
        latin: "O Sapientia, quae ex ore Altissimi prodiisti, attingens a fine usque ad finem, \
                fortiter suaviterque disponens omnia: veni ad docendum nos viam prudentiae.",
        english: "O Wisdom, who came from the mouth of the Most High, reaching from end to end \
                  and ordering all things mightily and sweetly: come, and teach us the way of \
                  prudence.",
        citation: "Isaiah 11:2-3, 28:29",
    },
    OAntiphon {
        day: 17,
        subtitle: "(O Adonai / O Lord of Might)",
        latin: "O Adonai, et Dux domus Israel, qui Moysi in igne flammae rubi apparuisti, et ei \
                in Sina legem dedisti: veni ad redimendum nos in brachio extento.",
        english: "O Lord and Ruler of the house of Israel, who appeared to Moses in the flame of \
                  the burning bush and gave him the law on Sinai: come, and redeem us with \
                  outstretched arm.",
        citation: "Isaiah 11:4-5, 33:22",
    },
    OAntiphon {
        day: 18,
        subtitle: "(O Radix Jesse / O Root of Jesse)",
        latin: "O Radix Jesse, qui stas in signum populorum, super quem continebunt reges os \
                suum, quem Gentes deprecabuntur: veni ad liberandum nos, jam noli tardare.",
        english: "O Root of Jesse, that stands for an ensign of the people, before whom the kings \
                  keep silence and unto whom the Gentiles shall make supplication: come, to \
                  deliver us, and tarry not.",
        citation: "Isaiah 11:1, 10",
    },
    OAntiphon {
        day: 19,
        subtitle: "(O Clavis David / O Key of David)",
        latin: "O Clavis David, et sceptrum domus Israel: qui aperis, et nemo claudit; claudis, \
                et nemo aperit: veni, et educ vinctum de domo carceris, sedentem in tenebris.",
        english: "O Key of David, and scepter of the house of Israel, who opens and no man shuts, \
                  who shuts and no man opens: come, and lead forth the captive who sits in the \
                  shadows from his prison.",
        citation: "Isaiah 9:6, 22:22",
    },
    OAntiphon {
        day: 20,
        subtitle: "(O Oriens / O Dayspring)",
        latin: "O Oriens, splendor lucis aeternae, et sol justitiae: veni, et illumina sedentes \
                in tenebris, et umbra mortis.",
        english: "O Dayspring, brightness of light eternal, and sun of righteousness: come, and \
                  enlighten those who sit in darkness and in the shadow of death.",
        citation: "Isaiah 9:2",
    },
    OAntiphon {
        day: 21,
        subtitle: "(O Rex Gentium / O King of the Nations)",
        latin: "O Rex Gentium, et desideratus earum, lapisque angularis, qui facis utraque unum: \
                veni, et salva hominem, quem de limo formasti.",
        english: "O King of the nations and their desired One, the cornerstone that makes both \
                  one: come, and deliver man, whom you formed out of the dust of the earth.",
        citation: "Isaiah 2:4, 9:7",
    },
    OAntiphon {
        day: 22,
        subtitle: "(O Emmanuel / O God With Us)",
        latin: "O Emmanuel, Rex et legifer noster, exspectatio gentium, et Salvator earum: veni \
                ad salvandum nos Domine Deus noster.",
        english: "O Emmanuel, God with us, our King and lawgiver, the expected of the nations and \
                  their Savior: come to save us, O Lord our God.",
        citation: "Isaiah 7:14",
    },
    OAntiphon {
        day: 23,
        subtitle: "(O Virgo Virginum / O Virgin of Virgins)",
        latin: "O Virgo virginum, quomodo fiet istud? Quia nec primam similem visa es nec habere \
                sequentem. Filiae Jerusalem, quid me admiramini? Divinum est mysterium hoc quod \
                cernitis.",
        english: "O Virgin of virgins, how shall this be? For neither before you was any like \
                  you, nor shall there be after. Daughters of Jerusalem, why do you marvel at \
                  me? The thing which you behold is a divine mystery.",
        citation: "",
    },
];

/// The O Antiphon for `date`, if it falls on 16–23 December.
pub fn o_antiphon(date: Date) -> Option<&'static OAntiphon> {
    if date.month() != Month::December {
        return None;
    }
    let day = date.day_of_month();
    ANTIPHONS.iter().find(|a| a.day == day)
}

/// Append the day's antiphon subtitle to `name`, once.
pub(crate) fn with_o_antiphon(name: &str, date: Date) -> Option<String> {
    let antiphon = o_antiphon(date)?;
    if name.ends_with(antiphon.subtitle) {
        return None;
    }
    Some(format!("{name} {}", antiphon.subtitle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_antiphon_per_day() {
        for day in 16..=23 {
            let date = Date::from_ymd(2020, 12, day).unwrap();
            let antiphon = o_antiphon(date).unwrap();
            assert_eq!(antiphon.day, day);
            assert!(antiphon.latin.starts_with("O "));
        }
        assert!(o_antiphon(Date::from_ymd(2020, 12, 15).unwrap()).is_none());
        assert!(o_antiphon(Date::from_ymd(2020, 12, 24).unwrap()).is_none());
        assert!(o_antiphon(Date::from_ymd(2020, 11, 17).unwrap()).is_none());
    }

    #[test]
    fn subtitle_is_added_once() {
        let date = Date::from_ymd(2019, 12, 17).unwrap();
        let named = with_o_antiphon("Tuesday after the Third Sunday of Advent", date).unwrap();
        assert_eq!(
            named,
            "Tuesday after the Third Sunday of Advent (O Adonai / O Lord of Might)"
        );
        assert!(with_o_antiphon(&named, date).is_none());
    }
}
