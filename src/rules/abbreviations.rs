/// A German abbreviation and its spelled-out form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abbreviation {
    /// Surface form as written in running text, lowercased, periods included.
    pub form: &'static str,
    /// Replacement used in extended mode.
    pub expansion: &'static str,
}

impl Abbreviation {
    const fn new(form: &'static str, expansion: &'static str) -> Self {
        Abbreviation { form, expansion }
    }

    /// The form with internal spaces removed (`"et al."` → `"etal."`).
    pub fn compact(&self) -> String {
        self.form.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Street abbreviation; only resolved when a house number follows.
pub const STREET: Abbreviation = Abbreviation::new("str.", "straße");

/// Speed unit spellings (`km/h`, and `kilometer/h` after unit expansion).
pub const SPEED_FORMS: &[&str] = &["km/h", "kilometer/h"];
pub const SPEED_EXPANSION: &str = "kilometer pro stunde";
pub const SPEED_COMPACT: &str = "kmh";

/// Longest abbreviation, counted in whitespace-separated words (`"u. s. w."`).
pub const MAX_WINDOW: usize = 3;

pub static ABBREVIATIONS: &[Abbreviation] = &[
    // single word, one period
    Abbreviation::new("abschn.", "abschnitt"),
    Abbreviation::new("aufl.", "auflage"),
    Abbreviation::new("bsp.", "beispiel"),
    Abbreviation::new("bspw.", "beispielsweise"),
    Abbreviation::new("bzgl.", "bezüglich"),
    Abbreviation::new("bzw.", "beziehungsweise"),
    Abbreviation::new("ca.", "circa"),
    Abbreviation::new("dh.", "das heißt"),
    Abbreviation::new("dr.", "doktor"),
    Abbreviation::new("etc.", "et cetera"),
    Abbreviation::new("etw.", "etwas"),
    Abbreviation::new("evtl.", "eventuell"),
    Abbreviation::new("ff.", "fortfolgende"),
    Abbreviation::new("gdw.", "genau dann wenn"),
    Abbreviation::new("ggf.", "gegebenenfalls"),
    Abbreviation::new("grds.", "grundsätzlich"),
    Abbreviation::new("hg.", "herausgegeben"),
    Abbreviation::new("hrsg.", "herausgeber"),
    Abbreviation::new("idr.", "in der regel"),
    Abbreviation::new("inkl.", "inklusive"),
    Abbreviation::new("insb.", "insbesondere"),
    Abbreviation::new("jmd.", "jemand"),
    Abbreviation::new("ka.", "keine angabe"),
    Abbreviation::new("nchr.", "nach christus"),
    Abbreviation::new("nr.", "nummer"),
    Abbreviation::new("oä.", "oder ähnliches"),
    Abbreviation::new("prof.", "professor"),
    Abbreviation::new("st.", "sankt"),
    Abbreviation::new("su.", "siehe unten"),
    Abbreviation::new("ua.", "unter anderem"),
    Abbreviation::new("uä.", "und ähnliches"),
    Abbreviation::new("usw.", "und so weiter"),
    Abbreviation::new("uu.", "unter umständen"),
    Abbreviation::new("uvm.", "und vieles mehr"),
    Abbreviation::new("va.", "vor allem"),
    Abbreviation::new("vchr.", "vor christus"),
    Abbreviation::new("vgl.", "vergleiche"),
    Abbreviation::new("zb.", "zum beispiel"),
    Abbreviation::new("zt.", "zum teil"),
    Abbreviation::new("zzgl.", "zuzüglich"),
    Abbreviation::new("et al.", "et alii"),
    // initials
    Abbreviation::new("d.h.", "das heißt"),
    Abbreviation::new("f.f.", "fortfolgende"),
    Abbreviation::new("g.d.w.", "genau dann wenn"),
    Abbreviation::new("i.d.r.", "in der regel"),
    Abbreviation::new("k.a.", "keine angabe"),
    Abbreviation::new("n.chr.", "nach christus"),
    Abbreviation::new("o.ä.", "oder ähnliches"),
    Abbreviation::new("s.o.", "siehe oben"),
    Abbreviation::new("s.u.", "siehe unten"),
    Abbreviation::new("u.a.", "unter anderem"),
    Abbreviation::new("u.ä.", "und ähnliches"),
    Abbreviation::new("u.s.w.", "und so weiter"),
    Abbreviation::new("u.u.", "unter umständen"),
    Abbreviation::new("u.v.m.", "und vieles mehr"),
    Abbreviation::new("v.a.", "vor allem"),
    Abbreviation::new("v.chr.", "vor christus"),
    Abbreviation::new("z.b.", "zum beispiel"),
    Abbreviation::new("z.hd.", "zu händen"),
    Abbreviation::new("z.t.", "zum teil"),
    Abbreviation::new("z.z.", "zurzeit"),
];
