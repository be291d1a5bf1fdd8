//! Czech templates (občanský zákoník §§ 1540–1542), in Czech and English.
//!
//! Structurally parallel to the Slovak catalog; the legal bases and
//! section wording follow Czech testamentary practice.

use serde_json::{json, Value};

use testa_core::{JurisdictionCode, LanguageCode, Severity, WillType};

use crate::condition::{Comparator, Predicate, SectionRule};
use crate::model::{
    ClauseKind, ExecutionInstructions, LegalClause, RuleCheck, SectionPlacement, TemplateId,
    TemplateSection, TemplateVariable, VariableRule, VariableSource, VariableType, WillTemplate,
};

const VERSION: &str = "1.1.0";

struct Strings {
    doc_title: &'static str,
    header_text: &'static str,
    sec_testator_title: &'static str,
    testator_body: &'static str,
    sec_revocation_title: &'static str,
    revocation_body: &'static str,
    sec_beneficiaries_title: &'static str,
    beneficiaries_body: &'static str,
    sec_forced_title: &'static str,
    forced_body: &'static str,
    sec_executor_title: &'static str,
    executor_body: &'static str,
    executor_backup_body: &'static str,
    sec_guardian_title: &'static str,
    guardian_body: &'static str,
    guardian_alt_body: &'static str,
    sec_special_title: &'static str,
    sec_residuary_title: &'static str,
    residuary_body: &'static str,
    residuary_default: &'static str,
    sec_signature_title: &'static str,
    signature_body: &'static str,
    sec_witnesses_title: &'static str,
    witnesses_body: &'static str,
    sec_notarial_title: &'static str,
    notarial_body: &'static str,
    label_testator_name: &'static str,
    label_beneficiaries: &'static str,
    label_witnesses: &'static str,
    msg_name_short: &'static str,
    msg_personal_id_shape: &'static str,
    msg_beneficiaries_required: &'static str,
    msg_witnesses_minimum: &'static str,
    clause_capacity: &'static str,
    clause_forced_heirs: &'static str,
}

fn strings(language: &LanguageCode) -> Option<&'static Strings> {
    match language.as_str() {
        "cs" => Some(&CS),
        "en" => Some(&EN),
        _ => None,
    }
}

static CS: Strings = Strings {
    doc_title: "ZÁVĚŤ",
    header_text: "Poslední vůle a závěť podle českého práva",
    sec_testator_title: "I. ZŮSTAVITEL",
    testator_body: "Já, {{testator_name}}, narozen(a) {{birth_date}} v {{birth_place}}, \
                    rodné číslo {{personal_id}}, trvale bytem {{address}}, prohlašuji, \
                    že tato listina obsahuje moji poslední vůli.",
    sec_revocation_title: "II. ODVOLÁNÍ PŘEDCHOZÍCH ZÁVĚTÍ",
    revocation_body: "Tímto odvolávám všechny své dřívější závěti a dovětky.",
    sec_beneficiaries_title: "III. USTANOVENÍ DĚDICŮ",
    beneficiaries_body: "Za své dědice ustanovuji: {{beneficiaries}}.",
    sec_forced_title: "IV. NEPOMINUTELNÍ DĚDICOVÉ",
    forced_body: "Beru na vědomí, že moji potomci jsou nepominutelnými dědici a náleží \
                  jim povinný díl z pozůstalosti podle zákona.",
    sec_executor_title: "VI. VYKONAVATEL ZÁVĚTI",
    executor_body: "Vykonavatelem své závěti ustanovuji {{executor_name}}.",
    executor_backup_body: "Nebude-li vykonavatel moci funkci vykonávat, ustanovuji \
                           náhradního vykonavatele: {{backup_executor}}.",
    sec_guardian_title: "VII. PORUČNICTVÍ",
    guardian_body: "Pro případ, že by mé nezletilé děti zůstaly bez zákonného zástupce, \
                    ustanovuji poručníkem: {{guardian_primary}}.",
    guardian_alt_body: "Náhradním poručníkem ustanovuji: {{guardian_alternate}}.",
    sec_special_title: "VIII. POSLEDNÍ PŘÁNÍ",
    sec_residuary_title: "IX. ZBYTEK POZŮSTALOSTI",
    residuary_body: "Zbytek své pozůstalosti odkazuji: {{residuary_beneficiary}}.",
    residuary_default: "mým zákonným dědicům",
    sec_signature_title: "X. PODPIS",
    signature_body: "V {{declaration_city}}, dne ________________\n\n\
                     _________________________________\n\
                     {{testator_name}}, zůstavitel",
    sec_witnesses_title: "SVĚDCI",
    witnesses_body: "Zůstavitel před námi současně přítomnými svědky prohlásil, že tato \
                     listina obsahuje jeho poslední vůli. Svědci: {{witnesses}}.\n\n\
                     Svědek 1: _____________________ Datum: _________\n\n\
                     Svědek 2: _____________________ Datum: _________",
    sec_notarial_title: "NOTÁŘSKÁ DOLOŽKA",
    notarial_body: "Tato závěť byla sepsána formou notářského zápisu notářem \
                    {{notary_name}} a eviduje se v Evidenci právních jednání pro případ \
                    smrti.",
    label_testator_name: "Jméno a příjmení zůstavitele",
    label_beneficiaries: "Dědicové",
    label_witnesses: "Svědci",
    msg_name_short: "Jméno zůstavitele je příliš krátké",
    msg_personal_id_shape: "Rodné číslo má mít tvar RRMMDD/XXXX",
    msg_beneficiaries_required: "Musí být ustanoven alespoň jeden dědic",
    msg_witnesses_minimum: "Jsou vyžadováni nejméně dva svědci",
    clause_capacity: "Prohlašuji, že jsem plně svéprávný(á) a tuto závěť činím svobodně, \
                      vážně a bez nátlaku.",
    clause_forced_heirs: "Nepominutelným dědicům (potomkům) náleží povinný díl z \
                          pozůstalosti — nezletilým tři čtvrtiny jejich zákonného podílu, \
                          zletilým jedna čtvrtina.",
};

static EN: Strings = Strings {
    doc_title: "LAST WILL AND TESTAMENT",
    header_text: "Last will and testament under Czech law",
    sec_testator_title: "I. THE TESTATOR",
    testator_body: "I, {{testator_name}}, born on {{birth_date}} in {{birth_place}}, \
                    personal identification number {{personal_id}}, permanently residing \
                    at {{address}}, declare that this instrument contains my last will.",
    sec_revocation_title: "II. REVOCATION OF PRIOR WILLS",
    revocation_body: "I hereby revoke all wills and codicils previously made by me.",
    sec_beneficiaries_title: "III. APPOINTMENT OF HEIRS",
    beneficiaries_body: "I appoint as my heirs: {{beneficiaries}}.",
    sec_forced_title: "IV. FORCED HEIRS",
    forced_body: "I acknowledge that my descendants are forced heirs entitled to their \
                  statutory compulsory share of the estate.",
    sec_executor_title: "VI. EXECUTOR OF THE WILL",
    executor_body: "I appoint {{executor_name}} as the executor of this will.",
    executor_backup_body: "Should the executor be unable to serve, I appoint as \
                           alternate executor: {{backup_executor}}.",
    sec_guardian_title: "VII. GUARDIANSHIP",
    guardian_body: "Should my minor children be left without a legal representative, I \
                    appoint as their guardian: {{guardian_primary}}.",
    guardian_alt_body: "I appoint as alternate guardian: {{guardian_alternate}}.",
    sec_special_title: "VIII. FINAL WISHES",
    sec_residuary_title: "IX. RESIDUARY ESTATE",
    residuary_body: "I bequeath the residue of my estate to: {{residuary_beneficiary}}.",
    residuary_default: "my lawful heirs",
    sec_signature_title: "X. SIGNATURE",
    signature_body: "In {{declaration_city}}, on ________________\n\n\
                     _________________________________\n\
                     {{testator_name}}, testator",
    sec_witnesses_title: "WITNESSES",
    witnesses_body: "The testator declared before us, witnesses present at the same \
                     time, that this instrument contains their last will. Witnesses: \
                     {{witnesses}}.\n\n\
                     Witness 1: _____________________ Date: _________\n\n\
                     Witness 2: _____________________ Date: _________",
    sec_notarial_title: "NOTARIAL CLAUSE",
    notarial_body: "This will was drawn up in the form of a notarial deed by notary \
                    {{notary_name}} and is recorded in the register of legal acts upon \
                    death.",
    label_testator_name: "Testator's full name",
    label_beneficiaries: "Heirs",
    label_witnesses: "Witnesses",
    msg_name_short: "Testator name is too short",
    msg_personal_id_shape: "Personal identification number should match RRMMDD/XXXX",
    msg_beneficiaries_required: "At least one heir must be appointed",
    msg_witnesses_minimum: "At least two witnesses are required",
    clause_capacity: "I declare that I have full legal capacity and make this will \
                      freely, seriously, and without duress.",
    clause_forced_heirs: "Forced heirs (descendants) are entitled to a compulsory share \
                          of the estate — minors to three quarters of their statutory \
                          share, adults to one quarter.",
};

fn var(
    key: &str,
    label: &str,
    data_type: VariableType,
    required: bool,
    source: VariableSource,
) -> TemplateVariable {
    TemplateVariable {
        key: key.to_string(),
        label: label.to_string(),
        data_type,
        required,
        source,
        default: Value::Null,
        rules: vec![],
    }
}

fn section(
    id: &str,
    title: &str,
    body: &str,
    required: bool,
    order: u32,
    placement: SectionPlacement,
    section_rule: Option<SectionRule>,
) -> TemplateSection {
    TemplateSection {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        required,
        rule: section_rule,
        order,
        placement,
    }
}

fn show_if_true(variable: &str) -> Option<SectionRule> {
    Some(SectionRule::ShowIf(Predicate {
        variable: variable.to_string(),
        op: Comparator::IsTrue,
        value: Value::Null,
    }))
}

fn show_if_present(variable: &str) -> Option<SectionRule> {
    Some(SectionRule::ShowIf(Predicate {
        variable: variable.to_string(),
        op: Comparator::IsPresent,
        value: Value::Null,
    }))
}

fn variables(s: &Strings, will_type: WillType) -> Vec<TemplateVariable> {
    let mut vars = vec![
        {
            let mut v = var(
                "testator_name",
                s.label_testator_name,
                VariableType::Text,
                true,
                VariableSource::Personal,
            );
            v.rules.push(VariableRule {
                check: RuleCheck::MinLength { value: 3 },
                message: s.msg_name_short.to_string(),
                severity: Severity::Error,
            });
            v
        },
        var("birth_date", "Date of birth", VariableType::Date, true, VariableSource::Personal),
        var("birth_place", "Birth place", VariableType::Text, false, VariableSource::Personal),
        {
            let mut v = var(
                "personal_id",
                "Personal id",
                VariableType::Text,
                false,
                VariableSource::Personal,
            );
            v.rules.push(VariableRule {
                check: RuleCheck::Pattern {
                    regex: r"^\d{6}/\d{3,4}$".to_string(),
                },
                message: s.msg_personal_id_shape.to_string(),
                severity: Severity::Warning,
            });
            v
        },
        var("address", "Permanent residence", VariableType::Text, true, VariableSource::Personal),
        var("declaration_city", "Place of signing", VariableType::Text, true, VariableSource::Personal),
        var(
            "has_protected_heirs",
            "Has protected heirs",
            VariableType::Boolean,
            false,
            VariableSource::Family,
        ),
        var(
            "has_minor_children",
            "Has minor children",
            VariableType::Boolean,
            false,
            VariableSource::Family,
        ),
        {
            let mut v = var(
                "beneficiaries",
                s.label_beneficiaries,
                VariableType::Array,
                true,
                VariableSource::Beneficiaries,
            );
            v.rules.push(VariableRule {
                check: RuleCheck::MinItems { value: 1 },
                message: s.msg_beneficiaries_required.to_string(),
                severity: Severity::Error,
            });
            v
        },
        {
            let mut v = var(
                "residuary_beneficiary",
                "Residuary beneficiary",
                VariableType::Text,
                false,
                VariableSource::Beneficiaries,
            );
            v.default = json!(s.residuary_default);
            v
        },
        var("has_executor", "Has executor", VariableType::Boolean, false, VariableSource::Executors),
        var("executor_name", "Executor", VariableType::Text, false, VariableSource::Executors),
        var(
            "backup_executor",
            "Alternate executor",
            VariableType::Text,
            false,
            VariableSource::Executors,
        ),
        var(
            "guardian_primary",
            "Primary guardian",
            VariableType::Text,
            false,
            VariableSource::Guardians,
        ),
        var(
            "guardian_alternate",
            "Alternate guardian",
            VariableType::Text,
            false,
            VariableSource::Guardians,
        ),
        var(
            "has_special_instructions",
            "Has special instructions",
            VariableType::Boolean,
            false,
            VariableSource::Special,
        ),
        var(
            "special_instructions",
            "Special instructions",
            VariableType::Array,
            false,
            VariableSource::Special,
        ),
    ];

    match will_type {
        WillType::Witnessed => {
            let mut v = var(
                "witnesses",
                s.label_witnesses,
                VariableType::Array,
                true,
                VariableSource::Witnesses,
            );
            v.rules.push(VariableRule {
                check: RuleCheck::MinItems { value: 2 },
                message: s.msg_witnesses_minimum.to_string(),
                severity: Severity::Error,
            });
            vars.push(v);
        }
        WillType::Notarial => {
            vars.push(var(
                "notary_name",
                "Notary",
                VariableType::Text,
                false,
                VariableSource::Notarization,
            ));
        }
        WillType::Holographic => {}
    }
    vars
}

fn sections(s: &Strings, will_type: WillType) -> Vec<TemplateSection> {
    let mut sections = vec![
        section("title", s.doc_title, s.header_text, true, 0, SectionPlacement::Header, None),
        section(
            "testator",
            s.sec_testator_title,
            s.testator_body,
            true,
            5,
            SectionPlacement::Header,
            None,
        ),
        section(
            "revocation",
            s.sec_revocation_title,
            s.revocation_body,
            true,
            10,
            SectionPlacement::Body,
            None,
        ),
        section(
            "beneficiaries",
            s.sec_beneficiaries_title,
            s.beneficiaries_body,
            true,
            20,
            SectionPlacement::Body,
            None,
        ),
        section(
            "forced_heirs",
            s.sec_forced_title,
            s.forced_body,
            false,
            30,
            SectionPlacement::Body,
            show_if_true("has_protected_heirs"),
        ),
        section(
            "executor",
            s.sec_executor_title,
            s.executor_body,
            false,
            40,
            SectionPlacement::Body,
            show_if_true("has_executor"),
        ),
        section(
            "executor_backup",
            s.sec_executor_title,
            s.executor_backup_body,
            false,
            45,
            SectionPlacement::Body,
            show_if_present("backup_executor"),
        ),
        section(
            "guardianship",
            s.sec_guardian_title,
            s.guardian_body,
            false,
            50,
            SectionPlacement::Body,
            show_if_true("has_minor_children"),
        ),
        section(
            "guardianship_alternate",
            s.sec_guardian_title,
            s.guardian_alt_body,
            false,
            55,
            SectionPlacement::Body,
            show_if_present("guardian_alternate"),
        ),
        section(
            "special_instructions",
            s.sec_special_title,
            "{{special_instructions}}",
            false,
            70,
            SectionPlacement::Body,
            show_if_true("has_special_instructions"),
        ),
        section(
            "residuary",
            s.sec_residuary_title,
            s.residuary_body,
            true,
            80,
            SectionPlacement::Body,
            None,
        ),
        section(
            "signature",
            s.sec_signature_title,
            s.signature_body,
            true,
            90,
            SectionPlacement::Footer,
            None,
        ),
    ];

    match will_type {
        WillType::Witnessed => sections.push(section(
            "witnesses",
            s.sec_witnesses_title,
            s.witnesses_body,
            true,
            95,
            SectionPlacement::Footer,
            None,
        )),
        WillType::Notarial => sections.push(section(
            "notarial_clause",
            s.sec_notarial_title,
            s.notarial_body,
            true,
            95,
            SectionPlacement::Footer,
            None,
        )),
        WillType::Holographic => {}
    }
    sections
}

fn clauses(s: &Strings) -> Vec<LegalClause> {
    vec![
        LegalClause {
            id: "capacity".to_string(),
            kind: ClauseKind::Mandatory,
            legal_basis: "§ 1525 občanského zákoníku".to_string(),
            text: s.clause_capacity.to_string(),
        },
        LegalClause {
            id: "forced_heirs_notice".to_string(),
            kind: ClauseKind::Conditional(Predicate {
                variable: "has_protected_heirs".to_string(),
                op: Comparator::IsTrue,
                value: Value::Null,
            }),
            legal_basis: "§ 1643 občanského zákoníku".to_string(),
            text: s.clause_forced_heirs.to_string(),
        },
    ]
}

fn execution(language: &LanguageCode, will_type: WillType) -> ExecutionInstructions {
    let czech = language.as_str() == "cs";
    match will_type {
        WillType::Holographic if czech => ExecutionInstructions {
            title: "Holografní závěť".to_string(),
            steps: [
                "Napište celou závěť vlastní rukou",
                "Podepište svým jménem a příjmením",
                "Uveďte datum a místo vytvoření",
                "Uložte na bezpečném místě",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Musí být celá napsaná vlastní rukou",
                "Musí být podepsaná",
                "Doporučuje se uvést datum",
                "Nepoužívejte psací stroj ani počítač",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Nepsané nebo počítačové části jsou neplatné",
                "Nečitelné písmo může způsobit problémy",
                "Opravy mohou vzbudit pochybnosti",
            ]
            .map(String::from)
            .to_vec(),
        },
        WillType::Holographic => ExecutionInstructions {
            title: "Holographic will".to_string(),
            steps: [
                "Write the entire will in your own hand",
                "Sign with your full name",
                "State the date and place of creation",
                "Store the document in a safe place",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Must be written entirely in your own hand",
                "Must be signed",
                "Dating the document is recommended",
                "Do not use a typewriter or computer",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Typed or printed parts are invalid",
                "Illegible handwriting can cause problems",
                "Corrections may raise doubts",
            ]
            .map(String::from)
            .to_vec(),
        },
        WillType::Witnessed if czech => ExecutionInstructions {
            title: "Závěť před svědky".to_string(),
            steps: [
                "Podepište závěť v přítomnosti dvou svědků",
                "Svědci musí podepsat současně",
                "Prohlásíte, že je to vaše závěť",
                "Svědci potvrdí podpisem",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Dva svědci musí být přítomni současně",
                "Svědci nesmí být dědici ani příbuzní dědiců",
                "Svědci musí být způsobilí k právním úkonům",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Nesprávní svědci mohou způsobit neplatnost",
                "Svědci musí chápat, co podepisují",
            ]
            .map(String::from)
            .to_vec(),
        },
        WillType::Witnessed => ExecutionInstructions {
            title: "Witnessed will".to_string(),
            steps: [
                "Sign the will in the presence of two witnesses",
                "The witnesses must sign at the same time",
                "Declare that the document is your will",
                "The witnesses confirm by signing",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Two witnesses must be present at the same time",
                "Witnesses may not be heirs or relatives of heirs",
                "Witnesses must have full legal capacity",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Ineligible witnesses can invalidate the will",
                "Witnesses must understand what they are signing",
            ]
            .map(String::from)
            .to_vec(),
        },
        WillType::Notarial if czech => ExecutionInstructions {
            title: "Notářská závěť".to_string(),
            steps: [
                "Navštivte notáře",
                "Předložte požadavky na závěť",
                "Notář sepíše závěť podle vašeho projevu",
                "Podepište před notářem",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Musí být sepsaná notářem",
                "Podpis před notářem",
                "Notářská pečeť a podpis",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Nejdražší forma závěti",
                "Vyžaduje osobní přítomnost",
            ]
            .map(String::from)
            .to_vec(),
        },
        WillType::Notarial => ExecutionInstructions {
            title: "Notarial will".to_string(),
            steps: [
                "Visit a notary",
                "Present your testamentary wishes",
                "The notary records the will from your declaration",
                "Sign before the notary",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Must be drawn up by a notary",
                "Signature before the notary",
                "Notarial seal and signature",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "The most expensive form of will",
                "Requires personal attendance",
            ]
            .map(String::from)
            .to_vec(),
        },
    }
}

/// Build the Czech template for the given will type and language, if the
/// language is in the catalog.
pub(super) fn build(will_type: WillType, language: &LanguageCode) -> Option<WillTemplate> {
    let s = strings(language)?;
    let jurisdiction =
        JurisdictionCode::new("CZ").expect("BUG: hardcoded jurisdiction code rejected");
    Some(WillTemplate {
        id: TemplateId::from_parts(&jurisdiction, will_type, language),
        jurisdiction,
        will_type,
        language: language.clone(),
        version: VERSION.to_string(),
        sections: sections(s, will_type),
        variables: variables(s, will_type),
        clauses: clauses(s),
        execution: execution(language, will_type),
    })
}
