//! The calendar of the 2019 Book of Common Prayer (ACNA).

use cc_core::errors::Result;
use cc_core::utilities::data_formatters::ordinal_word;
use cc_time::{Month, Weekday};

use super::texts::*;
use super::{names, Catalog, CatalogBuilder, ACNA_BCP2019};
use crate::collects::{Collect, Collects};
use crate::color::{Color, Colors};
use crate::commemoration::Commemoration;
use crate::proper::Proper;
use crate::rank::Rank;
use crate::saints::{Saint, SaintGender, SaintType};
use crate::season::{Season, SeasonKind};

/// Number of Sundays after the Epiphany the catalog provides.
const EPIPHANY_SUNDAYS: u32 = 8;

/// Number of Sundays after Trinity the catalog provides.
const TRINITY_SUNDAYS: u32 = 26;

pub(super) fn build() -> Result<Catalog> {
    let mut builder = Catalog::builder(ACNA_BCP2019, "Book of Common Prayer (2019)");
    builder = holy_days(builder);
    builder = lesser_feasts(builder);
    builder = advent_and_christmas(builder);
    builder = epiphany(builder);
    builder = ember_days(builder);
    builder = lent_and_holy_week(builder);
    builder = easter_to_trinity(builder);
    builder = after_trinity(builder);
    builder = seasons(builder);
    builder = propers(builder);
    builder.build()
}

fn holy_day(name: &str, month: Month, day: u8, color: Color, collect: &str) -> Commemoration {
    Commemoration::sanctorale(name, Rank::HolyDay, month, day)
        .with_color(color)
        .with_collects(Collects::one(collect))
}

fn sunday(name: &str, days_after_easter: i32, colors: Colors, collect: &str) -> Commemoration {
    Commemoration::temporale(name, Rank::Sunday, days_after_easter)
        .with_colors(colors)
        .with_collects(Collects::one(collect))
}

fn observance(name: &str, days_after_easter: i32, colors: Colors, collect: &str) -> Commemoration {
    Commemoration::temporale(name, Rank::PrivilegedObservance, days_after_easter)
        .with_colors(colors)
        .with_collects(Collects::one(collect))
}

fn ordinal(n: u32) -> String {
    ordinal_word(n).unwrap_or_else(|| n.to_string())
}

// ── Sanctorale ───────────────────────────────────────────────────────────────

fn holy_days(b: CatalogBuilder) -> CatalogBuilder {
    use Color::{Red, White};
    use Month::*;
    b.add(holy_day("Saint Andrew the Apostle", November, 30, Red, ANDREW))
        .add(holy_day("Saint Thomas the Apostle", December, 21, Red, THOMAS))
        .add(
            Commemoration::sanctorale(names::CHRISTMAS_DAY, Rank::PrincipalFeast, December, 25)
                .with_color(White)
                .with_collects(
                    Collects::one(CHRISTMAS)
                        .with_second(CHRISTMAS_NIGHT)
                        .with_eve(CHRISTMAS_EVE),
                ),
        )
        .add(holy_day("Saint Stephen, Deacon and Martyr", December, 26, Red, STEPHEN))
        .add(holy_day(
            "Saint John, Apostle and Evangelist",
            December,
            27,
            White,
            JOHN,
        ))
        .add(holy_day("The Holy Innocents", December, 28, Red, INNOCENTS))
        .add(holy_day(
            "The Circumcision and Holy Name of Our Lord Jesus Christ",
            January,
            1,
            White,
            HOLY_NAME,
        ))
        .add(
            Commemoration::sanctorale(names::EPIPHANY, Rank::PrincipalFeast, January, 6)
                .with_color(White)
                .with_collects(Collects::one(EPIPHANY)),
        )
        .add(holy_day(
            "The Confession of Saint Peter",
            January,
            18,
            White,
            CONFESSION_OF_PETER,
        ))
        .add(holy_day(
            "The Conversion of Saint Paul",
            January,
            25,
            White,
            CONVERSION_OF_PAUL,
        ))
        .add(holy_day(
            "The Presentation of Our Lord Jesus Christ in the Temple",
            February,
            2,
            White,
            PRESENTATION,
        ))
        .add(holy_day("Saint Matthias the Apostle", February, 24, Red, MATTHIAS))
        .add(holy_day(
            "Saint Joseph, Guardian of Our Lord",
            March,
            19,
            White,
            JOSEPH,
        ))
        .add(holy_day(
            "The Annunciation of Our Lord Jesus Christ to the Virgin Mary",
            March,
            25,
            White,
            ANNUNCIATION,
        ))
        .add(holy_day("Saint Mark the Evangelist", April, 25, Red, MARK))
        .add(holy_day(
            "Saint Philip and Saint James, Apostles",
            May,
            1,
            Red,
            PHILIP_AND_JAMES,
        ))
        .add(holy_day(
            "The Visitation of the Virgin Mary to Elizabeth and Zechariah",
            May,
            31,
            White,
            VISITATION,
        ))
        .add(holy_day("Saint Barnabas the Apostle", June, 11, Red, BARNABAS))
        .add(holy_day(
            "The Nativity of Saint John the Baptist",
            June,
            24,
            White,
            JOHN_BAPTIST,
        ))
        .add(holy_day(
            "Saint Peter and Saint Paul, Apostles",
            June,
            29,
            Red,
            PETER_AND_PAUL,
        ))
        .add(holy_day("Saint Mary Magdalene", July, 22, White, MARY_MAGDALENE))
        .add(holy_day("Saint James the Elder, Apostle", July, 25, Red, JAMES))
        .add(holy_day(
            "The Transfiguration of Our Lord Jesus Christ",
            August,
            6,
            White,
            TRANSFIGURATION,
        ))
        .add(holy_day("Saint Mary the Virgin", August, 15, White, MARY_THE_VIRGIN))
        .add(holy_day(
            "Saint Bartholomew the Apostle",
            August,
            24,
            Red,
            BARTHOLOMEW,
        ))
        .add(holy_day("Holy Cross Day", September, 14, Red, HOLY_CROSS))
        .add(holy_day(
            "Saint Matthew, Apostle and Evangelist",
            September,
            21,
            Red,
            MATTHEW,
        ))
        .add(holy_day(
            "Holy Michael and All Angels",
            September,
            29,
            White,
            MICHAEL,
        ))
        .add(holy_day("Saint Luke the Evangelist", October, 18, Red, LUKE))
        .add(holy_day(
            "Saint James of Jerusalem, Brother of Our Lord",
            October,
            23,
            Red,
            JAMES_OF_JERUSALEM,
        ))
        .add(holy_day(
            "Saint Simon and Saint Jude, Apostles",
            October,
            28,
            Red,
            SIMON_AND_JUDE,
        ))
        .add(
            Commemoration::sanctorale("All Saints' Day", Rank::PrincipalFeast, November, 1)
                .with_color(White)
                .with_collects(Collects::one(ALL_SAINTS)),
        )
}

fn lesser_feasts(b: CatalogBuilder) -> CatalogBuilder {
    use Month::*;
    use SaintGender::{Female, Male, Plural};
    use SaintType::*;

    // (month, day, name, common, gender, blank)
    let feasts: [(Month, u8, &str, SaintType, SaintGender, Option<&str>); 30] = [
        (January, 13, "Hilary of Poitiers", Teacher, Male, None),
        (January, 17, "Antony of Egypt", Monastic, Male, None),
        (January, 21, "Agnes of Rome", Martyr, Female, None),
        (February, 3, "Anskar", Missionary, Male, Some("Denmark and Sweden")),
        (February, 14, "Cyril and Methodius", Missionary, Plural, Some("Moravia")),
        (February, 23, "Polycarp", Martyr, Male, None),
        (March, 7, "Perpetua and Felicity", Martyr, Plural, None),
        (March, 17, "Patrick", Missionary, Male, Some("Ireland")),
        (March, 27, "Charles Henry Brent", Ecumenist, Male, None),
        (April, 21, "Anselm", Teacher, Male, None),
        (April, 29, "Catherine of Siena", Monastic, Female, None),
        (May, 2, "Athanasius", Teacher, Male, None),
        (May, 26, "Augustine of Canterbury", Missionary, Male, Some("England")),
        (June, 1, "Justin Martyr", Martyr, Male, None),
        (June, 9, "Columba", Missionary, Male, Some("Scotland")),
        (June, 28, "Irenaeus", Teacher, Male, None),
        (July, 11, "Benedict of Nursia", Monastic, Male, None),
        (July, 29, "Mary and Martha of Bethany", Saint1, Plural, None),
        (August, 13, "Jeremy Taylor", Pastor, Male, None),
        (August, 20, "Bernard of Clairvaux", Monastic, Male, None),
        (August, 28, "Augustine of Hippo", Teacher, Male, None),
        (September, 13, "Cyprian of Carthage", Martyr, Male, None),
        (September, 30, "Jerome", Teacher, Male, None),
        (October, 4, "Francis of Assisi", Renewer, Male, None),
        (
            October,
            16,
            "Hugh Latimer, Nicholas Ridley and Thomas Cranmer",
            Reformer,
            Plural,
            None,
        ),
        (October, 26, "Alfred the Great", Saint2, Male, None),
        (November, 11, "Martin of Tours", Pastor, Male, None),
        (December, 6, "Nicholas of Myra", Pastor, Male, None),
        (December, 7, "Ambrose of Milan", Teacher, Male, None),
        (December, 29, "Thomas Becket", Martyr, Male, None),
    ];

    feasts
        .into_iter()
        .fold(b, |b, (month, day, name, saint_type, gender, blank)| {
            let color = if saint_type == Martyr {
                Color::Red
            } else {
                Color::White
            };
            let mut saint = Saint::new(name, saint_type, gender);
            if let Some(blank) = blank {
                saint = saint.with_blank(blank);
            }
            b.add(
                Commemoration::sanctorale(name, Rank::LesserFeast, month, day)
                    .with_color(color)
                    .with_saint(saint),
            )
        })
}

// ── Weekday-relative and temporale ───────────────────────────────────────────

fn advent_and_christmas(b: CatalogBuilder) -> CatalogBuilder {
    let advent_colors = || Colors::of(Color::Purple).with_alternate(Color::Blue);
    let advent_sunday = |name: &str, before_christmas: i32, collect: &str| {
        Commemoration::sanctorale_based(
            name,
            Rank::Sunday,
            Weekday::Sunday,
            before_christmas,
            Month::December,
            25,
        )
        .with_colors(advent_colors())
        .with_collects(Collects::one(collect))
    };
    let christmas_sunday = |name: &str, after_christmas: i32, collect: &str| {
        Commemoration::sanctorale_based(
            name,
            Rank::Sunday,
            Weekday::Sunday,
            after_christmas,
            Month::December,
            25,
        )
        .with_color(Color::White)
        .with_collects(Collects::one(collect))
    };

    b.add(advent_sunday("The First Sunday of Advent", -4, ADVENT_1))
        .add(advent_sunday("The Second Sunday of Advent", -3, ADVENT_2))
        .add(
            advent_sunday("The Third Sunday of Advent", -2, ADVENT_3).with_colors(
                Colors::of(Color::Purple)
                    .with_alternate(Color::Blue)
                    .with_notes("Rose may be used"),
            ),
        )
        .add(advent_sunday("The Fourth Sunday of Advent", -1, ADVENT_4))
        .add(christmas_sunday(
            "The First Sunday of Christmas",
            1,
            CHRISTMAS_SUNDAY_1,
        ))
        .add_blocked(
            christmas_sunday("The Second Sunday of Christmas", 2, CHRISTMAS_SUNDAY_2),
            names::EPIPHANY,
        )
        .add(
            Commemoration::sanctorale_based(
                "Thanksgiving Day",
                Rank::HolyDay,
                Weekday::Thursday,
                1,
                Month::November,
                21,
            )
            .with_color(Color::White)
            .with_collects(Collects::one(THANKSGIVING)),
        )
        .add(
            Commemoration::sanctorale_based(
                "The Sunday next before Advent",
                Rank::Sunday,
                Weekday::Sunday,
                -5,
                Month::December,
                25,
            )
            .with_color(Color::Green)
            .with_collects(Collects::one(NEXT_BEFORE_ADVENT)),
        )
}

fn epiphany(b: CatalogBuilder) -> CatalogBuilder {
    let collects = [
        EPIPHANY_1,
        EPIPHANY_2,
        EPIPHANY_3,
        EPIPHANY_4,
        EPIPHANY_5,
        EPIPHANY_6,
        SEPTUAGESIMA,
        SEXAGESIMA,
    ];
    let b = (1..=EPIPHANY_SUNDAYS)
        .zip(collects)
        .fold(b, |b, (n, collect)| {
            let color = if n == 1 { Color::White } else { Color::Green };
            b.add_blocked(
                Commemoration::sanctorale_based(
                    format!("The {} Sunday after the Epiphany", ordinal(n)),
                    Rank::Sunday,
                    Weekday::Sunday,
                    n as i32,
                    Month::January,
                    6,
                )
                .with_color(color)
                .with_collects(Collects::one(collect)),
                "The Last Sunday after the Epiphany",
            )
        });
    b.add(sunday(
        "The Last Sunday after the Epiphany",
        -49,
        Colors::of(Color::White),
        QUINQUAGESIMA,
    ))
}

fn ember_days(b: CatalogBuilder) -> CatalogBuilder {
    let mut b = b;
    // Wednesday, Friday and Saturday after Saint Lucy and after Holy Cross Day.
    for (season, month, day) in [("Advent", Month::December, 13), ("September", Month::September, 14)] {
        for (weekday, offset) in [("Wednesday", 0), ("Friday", 2), ("Saturday", 3)] {
            b = b.add_offset(
                Commemoration::sanctorale_based(
                    format!("Ember {weekday} in {season}"),
                    Rank::EmberDay,
                    Weekday::Wednesday,
                    1,
                    month,
                    day,
                )
                .with_color(Color::Purple)
                .with_collects(Collects::one(EMBER)),
                offset,
            );
        }
    }
    // After the First Sunday in Lent and after the Day of Pentecost.
    for (season, base) in [("in Lent", -42), ("after Pentecost", 49)] {
        for (weekday, offset) in [("Wednesday", 3), ("Friday", 5), ("Saturday", 6)] {
            b = b.add(
                Commemoration::temporale(
                    format!("Ember {weekday} {season}"),
                    Rank::EmberDay,
                    base + offset,
                )
                .with_color(Color::Purple)
                .with_collects(Collects::one(EMBER)),
            );
        }
    }
    b
}

fn lent_and_holy_week(b: CatalogBuilder) -> CatalogBuilder {
    let lent = || Colors::of(Color::Purple);
    let passion = || Colors::of(Color::Red).with_alternate(Color::Purple);
    b.add(observance(
        names::ASH_WEDNESDAY,
        -46,
        Colors::of(Color::Purple).with_alternate(Color::Black),
        ASH_WEDNESDAY,
    ))
    .add(sunday("The First Sunday in Lent", -42, lent(), LENT_1))
    .add(sunday("The Second Sunday in Lent", -35, lent(), LENT_2))
    .add(sunday("The Third Sunday in Lent", -28, lent(), LENT_3))
    .add(sunday(
        "The Fourth Sunday in Lent",
        -21,
        Colors::of(Color::Purple).with_notes("Rose may be used"),
        LENT_4,
    ))
    .add(sunday("The Fifth Sunday in Lent", -14, lent(), LENT_5))
    .add(sunday("Palm Sunday", -7, passion(), PALM_SUNDAY))
    .add(observance("Monday of Holy Week", -6, passion(), HOLY_MONDAY))
    .add(observance("Tuesday of Holy Week", -5, passion(), HOLY_TUESDAY))
    .add(observance("Wednesday of Holy Week", -4, passion(), HOLY_WEDNESDAY))
    .add(observance(
        "Maundy Thursday",
        -3,
        Colors::of(Color::White).with_alternate(Color::Red),
        MAUNDY_THURSDAY,
    ))
    .add(observance(
        names::GOOD_FRIDAY,
        -2,
        Colors::of(Color::Black).with_alternate(Color::Red),
        GOOD_FRIDAY,
    ))
    .add(
        Commemoration::temporale("Holy Saturday", Rank::PrivilegedObservance, -1)
            .with_collects(Collects::one(HOLY_SATURDAY)),
    )
}

fn easter_to_trinity(b: CatalogBuilder) -> CatalogBuilder {
    let white = || Colors {
        additional_color: Some(Color::Gold),
        ..Colors::of(Color::White)
    };
    let mut b = b.add(
        Commemoration::temporale(names::EASTER_DAY, Rank::PrincipalFeast, 0)
            .with_colors(white())
            .with_collects(Collects::one(EASTER)),
    );
    for (offset, weekday) in (1..=6).zip(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]) {
        b = b.add(observance(
            &format!("{weekday} of Easter Week"),
            offset,
            white(),
            EASTER,
        ));
    }
    let easter_sundays = [EASTER_2, EASTER_3, EASTER_4, EASTER_5, EASTER_6];
    for (n, collect) in (2..=6).zip(easter_sundays) {
        b = b.add(sunday(
            &format!("The {} Sunday of Easter", ordinal(n)),
            7 * (n as i32 - 1),
            white(),
            collect,
        ));
    }
    for (offset, weekday) in (36..=38).zip(["Monday", "Tuesday", "Wednesday"]) {
        b = b.add(
            Commemoration::temporale(format!("Rogation {weekday}"), Rank::RogationDay, offset)
                .with_color(Color::Purple)
                .with_collects(Collects::one(ROGATION)),
        );
    }
    b.add(
        Commemoration::temporale(names::ASCENSION_DAY, Rank::PrincipalFeast, 39)
            .with_colors(white())
            .with_collects(Collects::one(ASCENSION)),
    )
    .add(sunday(
        "The Sunday after the Ascension",
        42,
        white(),
        SUNDAY_AFTER_ASCENSION,
    ))
    .add(
        Commemoration::temporale(names::PENTECOST, Rank::PrincipalFeast, 49)
            .with_color(Color::Red)
            .with_collects(Collects::one(PENTECOST)),
    )
    .add(
        Commemoration::temporale(names::TRINITY_SUNDAY, Rank::PrincipalFeast, 56)
            .with_color(Color::White)
            .with_collects(Collects::one(TRINITY)),
    )
}

fn after_trinity(b: CatalogBuilder) -> CatalogBuilder {
    // The Sunday collects come from the propers.
    (1..=TRINITY_SUNDAYS).fold(b, |b, n| {
        b.add_blocked(
            Commemoration::temporale(
                format!("The {} Sunday after Trinity", ordinal(n)),
                Rank::Sunday,
                56 + 7 * n as i32,
            )
            .with_color(Color::Green),
            "The Sunday next before Advent",
        )
    })
}

// ── Seasons and propers ──────────────────────────────────────────────────────

fn seasons(b: CatalogBuilder) -> CatalogBuilder {
    b.season(
        Season::new(SeasonKind::Advent, "The First Sunday of Advent", Color::Purple)
            .with_alternate_color(Color::Blue),
    )
    .season(Season::new(SeasonKind::Christmastide, names::CHRISTMAS_DAY, Color::White))
    .season(Season::new(SeasonKind::Epiphanytide, names::EPIPHANY, Color::Green))
    .season(Season::new(SeasonKind::Lent, names::ASH_WEDNESDAY, Color::Purple))
    .season(
        Season::new(SeasonKind::HolyWeek, "Palm Sunday", Color::Red)
            .with_alternate_color(Color::Purple),
    )
    .season(Season::new(SeasonKind::Eastertide, names::EASTER_DAY, Color::White))
    .season(Season::new(
        SeasonKind::AfterPentecost,
        names::PENTECOST,
        Color::Green,
    ))
}

/// Proper `n` covers the seven days from 8 May + 7(n − 1).
fn propers(b: CatalogBuilder) -> CatalogBuilder {
    let late = [EPIPHANY_3, EPIPHANY_4, EPIPHANY_5, EPIPHANY_6];
    let collects = AFTER_TRINITY.iter().chain(late.iter());
    (1u8..=28).zip(collects).fold(b, |b, (number, collect)| {
        let first = 7 * (number as u16 - 1);
        b.proper(Proper {
            number,
            start: month_day_after_may_7(first + 1),
            end: month_day_after_may_7(first + 7),
            collect: Some(Collect::from(*collect)),
        })
    })
}

/// (month, day) `days` days after 7 May.
fn month_day_after_may_7(days: u16) -> (u8, u8) {
    const LENGTHS: [(u8, u16); 8] = [
        (5, 31),
        (6, 30),
        (7, 31),
        (8, 31),
        (9, 30),
        (10, 31),
        (11, 30),
        (12, 31),
    ];
    let mut day = 7 + days;
    for (month, length) in LENGTHS {
        if day <= length {
            return (month, day as u8);
        }
        day -= length;
    }
    (12, 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commemoration::CommemorationKind;

    #[test]
    fn proper_ranges_tile_may_to_november() {
        assert_eq!(month_day_after_may_7(1), (5, 8));
        assert_eq!(month_day_after_may_7(24), (5, 31));
        assert_eq!(month_day_after_may_7(25), (6, 1));
        let catalog = build().unwrap();
        let propers = catalog.propers();
        assert_eq!(propers[0].start, (5, 8));
        assert_eq!(propers[0].end, (5, 14));
        assert_eq!(propers[27].number, 28);
        assert_eq!(propers[27].start, (11, 13));
        assert_eq!(propers[27].end, (11, 19));
        for pair in propers.windows(2) {
            assert_eq!(
                month_day_after_may_7_inverse(pair[0].end) + 1,
                month_day_after_may_7_inverse(pair[1].start)
            );
        }
    }

    fn month_day_after_may_7_inverse(md: (u8, u8)) -> u16 {
        (1..=300).find(|&d| month_day_after_may_7(d) == md).unwrap()
    }

    #[test]
    fn ember_days_anchor_on_lucy_and_holy_cross() {
        let catalog = build().unwrap();
        let advent = catalog.commemoration("Ember Friday in Advent").unwrap();
        match advent.kind {
            CommemorationKind::SanctoraleBased {
                month_after,
                day_after,
                days_offset,
                ..
            } => {
                assert_eq!((month_after, day_after, days_offset), (Month::December, 13, 2));
            }
            ref other => panic!("unexpected kind {other:?}"),
        }
        assert!(catalog.commemoration("Ember Saturday after Pentecost").is_some());
    }

    #[test]
    fn lesser_feasts_carry_saints() {
        let catalog = build().unwrap();
        let patrick = catalog.commemoration("Patrick").unwrap();
        assert_eq!(patrick.rank, Rank::LesserFeast);
        let saint = patrick.saint.as_ref().unwrap();
        assert_eq!(saint.fill_in_the_blank.as_deref(), Some("Ireland"));
        assert!(patrick.collects.collect_1.is_none());
    }

    #[test]
    fn numbered_sundays_are_blocked() {
        let catalog = build().unwrap();
        let eighth = catalog
            .commemoration("The Eighth Sunday after the Epiphany")
            .unwrap();
        assert_eq!(
            eighth.cannot_occur_after.as_ref().map(|c| c.key()),
            Some("The Last Sunday after the Epiphany")
        );
        let last = catalog
            .commemoration("The Twenty-Sixth Sunday after Trinity")
            .unwrap();
        assert_eq!(
            last.cannot_occur_after.as_ref().map(|c| c.key()),
            Some("The Sunday next before Advent")
        );
    }
}
