//! Saints and the common collects used for lesser feasts.
//!
//! A lesser feast without a collect of its own takes the common collect for
//! its class of saint, with the saint's name and the grammatical number and
//! gender of the commemoration substituted into the stock text.

use crate::collects::Collect;

/// Which common a saint is commemorated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaintType {
    /// Of a pastor.
    Pastor,
    /// Of a monastic or religious.
    Monastic,
    /// Of a martyr.
    Martyr,
    /// Of a missionary or evangelist.
    Missionary,
    /// Of a teacher of the faith.
    Teacher,
    /// Of a renewer of society.
    Renewer,
    /// Of a reformer of the church.
    Reformer,
    /// Of any commemoration (first form).
    Saint1,
    /// Of any commemoration (second form).
    Saint2,
    /// Of an ecumenist.
    Ecumenist,
}

impl SaintType {
    /// Upper-case identifier, e.g. `"MARTYR"`.
    pub fn name(self) -> &'static str {
        match self {
            SaintType::Pastor => "PASTOR",
            SaintType::Monastic => "MONASTIC",
            SaintType::Martyr => "MARTYR",
            SaintType::Missionary => "MISSIONARY",
            SaintType::Teacher => "TEACHER",
            SaintType::Renewer => "RENEWER",
            SaintType::Reformer => "REFORMER",
            SaintType::Saint1 => "SAINT_1",
            SaintType::Saint2 => "SAINT_2",
            SaintType::Ecumenist => "ECUMENIST",
        }
    }

    fn template(self) -> &'static str {
        match self {
            SaintType::Pastor => {
                "Heavenly Father, Shepherd of your people, we thank you for your {servant} \
                 {name}, who {was} faithful in the care and nurture of your flock; and we pray \
                 that, following {his} example and the teaching of {his} holy life, we may by \
                 your grace grow into the stature of the fullness of our Lord and Savior Jesus \
                 Christ; who lives and reigns with you and the Holy Spirit, one God, for ever \
                 and ever. Amen."
            }
            SaintType::Monastic => {
                "O God, by whose grace your {servant} {name}, kindled with the flame of your \
                 love, became {light} in your Church: Grant that we also may be aflame with the \
                 spirit of love and discipline, and walk before you as children of light; \
                 through Jesus Christ our Lord, who lives and reigns with you, in the unity of \
                 the Holy Spirit, one God, now and for ever. Amen."
            }
            SaintType::Martyr => {
                "Almighty God, who gave to your {servant} {name} boldness to confess the Name \
                 of our Savior Jesus Christ before the rulers of this world, and courage to die \
                 for this faith: Grant that we may always be ready to give a reason for the hope \
                 that is in us, and to suffer gladly for the sake of our Lord Jesus Christ; who \
                 lives and reigns with you and the Holy Spirit, one God, for ever and ever. Amen."
            }
            SaintType::Missionary => {
                "Almighty and everlasting God, we thank you for your {servant} {name}, whom you \
                 called to preach the Gospel to {people}. Raise up in this and every land \
                 evangelists and heralds of your kingdom, that your Church may proclaim the \
                 unsearchable riches of our Savior Jesus Christ; who lives and reigns with you \
                 and the Holy Spirit, one God, now and for ever. Amen."
            }
            SaintType::Teacher => {
                "Almighty God, you gave your {servant} {name} special gifts of grace to \
                 understand and teach the truth as it is in Christ Jesus: Grant that by this \
                 teaching we may know you, the one true God, and Jesus Christ whom you have \
                 sent; who lives and reigns with you and the Holy Spirit, one God, for ever and \
                 ever. Amen."
            }
            SaintType::Renewer => {
                "O God, your Son came among us to serve and not to be served, and to give his \
                 life for the life of the world: Lead us by the example of your {servant} \
                 {name} to minister to the poor and the afflicted, and to labor for the justice \
                 of your kingdom; through Jesus Christ our Lord, who lives and reigns with you \
                 and the Holy Spirit, one God, for ever and ever. Amen."
            }
            SaintType::Reformer => {
                "O God, by your Holy Spirit you raised up your {servant} {name} to call your \
                 Church back to the truth of your Word: Keep us steadfast in that same faith, \
                 and by {his} example make us bold to confess Christ in word and deed; through \
                 Jesus Christ our Lord, who lives and reigns with you and the Holy Spirit, one \
                 God, for ever and ever. Amen."
            }
            SaintType::Saint1 => {
                "Almighty God, you have surrounded us with a great cloud of witnesses: Grant \
                 that we, encouraged by the good example of your {servant} {name}, may persevere \
                 in running the race that is set before us, until at last we may with {him} \
                 attain to your eternal joy; through Jesus Christ, the pioneer and perfecter of \
                 our faith, who lives and reigns with you and the Holy Spirit, one God, for ever \
                 and ever. Amen."
            }
            SaintType::Saint2 => {
                "O God, you have brought us near to an innumerable company of angels, and to \
                 the spirits of the righteous made perfect: Grant us during our earthly \
                 pilgrimage to abide in the fellowship of your {servant} {name}, and in our \
                 heavenly country to become partakers of {his} joy; through Jesus Christ our \
                 Lord, who lives and reigns with you and the Holy Spirit, one God, for ever and \
                 ever. Amen."
            }
            SaintType::Ecumenist => {
                "Almighty God, we give you thanks for the ministry of your {servant} {name}, \
                 who labored that your Church might be one: Grant that, following {his} \
                 example, we may seek the unity of all who confess the Name of Jesus Christ, \
                 that the world may believe; who lives and reigns with you and the Holy Spirit, \
                 one God, for ever and ever. Amen."
            }
        }
    }
}

/// Grammatical gender and number of a commemoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaintGender {
    /// One man.
    Male,
    /// One woman.
    Female,
    /// Two or more saints commemorated together.
    Plural,
}

impl SaintGender {
    fn possessive(self) -> &'static str {
        match self {
            SaintGender::Male => "his",
            SaintGender::Female => "her",
            SaintGender::Plural => "their",
        }
    }

    fn object(self) -> &'static str {
        match self {
            SaintGender::Male => "him",
            SaintGender::Female => "her",
            SaintGender::Plural => "them",
        }
    }

    fn is_plural(self) -> bool {
        self == SaintGender::Plural
    }
}

/// The saint (or saints) a lesser feast commemorates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saint {
    /// Name as it appears in the collect, e.g. `"Polycarp"`.
    pub name: String,
    /// Which common the collect is drawn from.
    pub saint_type: SaintType,
    /// Gender and number for pronoun agreement.
    pub gender: SaintGender,
    /// Text for the blank some commons leave, e.g. the people a missionary
    /// was sent to.
    pub fill_in_the_blank: Option<String>,
}

impl Saint {
    /// A saint commemorated from `saint_type`.
    pub fn new(name: impl Into<String>, saint_type: SaintType, gender: SaintGender) -> Self {
        Self {
            name: name.into(),
            saint_type,
            gender,
            fill_in_the_blank: None,
        }
    }

    /// Fill the common's blank.
    pub fn with_blank(mut self, text: impl Into<String>) -> Self {
        self.fill_in_the_blank = Some(text.into());
        self
    }

    /// Build the common collect for this saint.
    pub fn common_collect(&self) -> Collect {
        let plural = self.gender.is_plural();
        let people = match &self.fill_in_the_blank {
            Some(blank) => format!("the people of {blank}"),
            None => "the nations".to_string(),
        };
        let text = self
            .saint_type
            .template()
            .replace("{servant}", if plural { "servants" } else { "servant" })
            .replace("{name}", &self.name)
            .replace("{was}", if plural { "were" } else { "was" })
            .replace(
                "{light}",
                if plural {
                    "burning and shining lights"
                } else {
                    "a burning and a shining light"
                },
            )
            .replace("{people}", &people)
            .replace("{his}", self.gender.possessive())
            .replace("{him}", self.gender.object());
        Collect::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pastor_uses_pronouns() {
        let saint = Saint::new("Nicholas", SaintType::Pastor, SaintGender::Male);
        let text = saint.common_collect().to_string();
        assert!(text.contains("your servant Nicholas, who was faithful"));
        assert!(text.contains("following his example and the teaching of his holy life"));
    }

    #[test]
    fn plural_saints_agree() {
        let saint = Saint::new("Perpetua and Felicity", SaintType::Martyr, SaintGender::Plural);
        let text = saint.common_collect().to_string();
        assert!(text.contains("your servants Perpetua and Felicity boldness"));

        let monks = Saint::new("Cyril and Methodius", SaintType::Monastic, SaintGender::Plural);
        assert!(monks
            .common_collect()
            .text()
            .contains("became burning and shining lights"));
    }

    #[test]
    fn missionary_fills_blank() {
        let saint = Saint::new("Patrick", SaintType::Missionary, SaintGender::Male)
            .with_blank("Ireland");
        assert!(saint
            .common_collect()
            .text()
            .contains("to preach the Gospel to the people of Ireland."));
        let unnamed = Saint::new("Anskar", SaintType::Missionary, SaintGender::Male);
        assert!(unnamed.common_collect().text().contains("to the nations."));
    }

    #[test]
    fn no_placeholders_survive() {
        let types = [
            SaintType::Pastor,
            SaintType::Monastic,
            SaintType::Martyr,
            SaintType::Missionary,
            SaintType::Teacher,
            SaintType::Renewer,
            SaintType::Reformer,
            SaintType::Saint1,
            SaintType::Saint2,
            SaintType::Ecumenist,
        ];
        for saint_type in types {
            for gender in [SaintGender::Male, SaintGender::Female, SaintGender::Plural] {
                let text = Saint::new("N.", saint_type, gender).common_collect();
                assert!(!text.text().contains('{'), "{}: {text}", saint_type.name());
                assert!(text.text().ends_with("Amen."));
            }
        }
    }
}
