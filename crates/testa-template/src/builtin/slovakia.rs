//! Slovak templates (Občiansky zákonník §§ 476–480), in Slovak and English.

use serde_json::{json, Value};

use testa_core::{JurisdictionCode, LanguageCode, Severity, WillType};

use crate::condition::{Comparator, Predicate, SectionRule};
use crate::model::{
    ClauseKind, ExecutionInstructions, LegalClause, RuleCheck, SectionPlacement, TemplateId,
    TemplateSection, TemplateVariable, VariableRule, VariableSource, VariableType, WillTemplate,
};

const VERSION: &str = "1.2.0";

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
    label_birth_date: &'static str,
    label_address: &'static str,
    label_city: &'static str,
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
        "sk" => Some(&SK),
        "en" => Some(&EN),
        _ => None,
    }
}

static SK: Strings = Strings {
    doc_title: "ZÁVET",
    header_text: "Posledná vôľa a závet podľa slovenského práva",
    sec_testator_title: "I. PORUČITEĽ",
    testator_body: "Ja, {{testator_name}}, narodený(á) {{birth_date}} v {{birth_place}}, \
                    rodné číslo {{personal_id}}, trvale bytom {{address}}, vyhlasujem, \
                    že táto listina obsahuje moju poslednú vôľu.",
    sec_revocation_title: "II. ODVOLANIE PREDCHÁDZAJÚCICH ZÁVETOV",
    revocation_body: "Týmto odvolávam všetky svoje skoršie závety a dovetky.",
    sec_beneficiaries_title: "III. USTANOVENIE DEDIČOV",
    beneficiaries_body: "Za svojich dedičov ustanovujem: {{beneficiaries}}.",
    sec_forced_title: "IV. NEOPOMINUTEĽNÍ DEDIČIA",
    forced_body: "Beriem na vedomie, že moji potomkovia sú neopominuteľnými dedičmi a \
                  patrí im povinný podiel z dedičstva podľa zákona.",
    sec_executor_title: "VI. VYKONÁVATEĽ ZÁVETU",
    executor_body: "Za vykonávateľa svojho závetu ustanovujem {{executor_name}}.",
    executor_backup_body: "Ak vykonávateľ nebude môcť funkciu vykonávať, ustanovujem \
                           náhradného vykonávateľa: {{backup_executor}}.",
    sec_guardian_title: "VII. PORUČNÍCTVO",
    guardian_body: "Pre prípad, že by moje maloleté deti zostali bez zákonného zástupcu, \
                    ustanovujem za poručníka: {{guardian_primary}}.",
    guardian_alt_body: "Za náhradného poručníka ustanovujem: {{guardian_alternate}}.",
    sec_special_title: "VIII. POSLEDNÉ PRIANIA",
    sec_residuary_title: "IX. ZVYŠOK POZOSTALOSTI",
    residuary_body: "Zvyšok svojej pozostalosti odkazujem: {{residuary_beneficiary}}.",
    residuary_default: "mojim zákonným dedičom",
    sec_signature_title: "X. PODPIS",
    signature_body: "V {{declaration_city}}, dňa ________________\n\n\
                     _________________________________\n\
                     {{testator_name}}, poručiteľ",
    sec_witnesses_title: "SVEDKOVIA",
    witnesses_body: "Poručiteľ pred nami súčasne prítomnými svedkami vyhlásil, že táto \
                     listina obsahuje jeho poslednú vôľu. Svedkovia: {{witnesses}}.\n\n\
                     Svedok 1: _____________________ Dátum: _________\n\n\
                     Svedok 2: _____________________ Dátum: _________",
    sec_notarial_title: "NOTÁRSKA DOLOŽKA",
    notarial_body: "Tento závet bol spísaný vo forme notárskej zápisnice notárom \
                    {{notary_name}} a registruje sa v Notárskom centrálnom registri \
                    závetov.",
    label_testator_name: "Meno a priezvisko poručiteľa",
    label_birth_date: "Dátum narodenia",
    label_address: "Trvalé bydlisko",
    label_city: "Miesto podpisu",
    label_beneficiaries: "Dedičia",
    label_witnesses: "Svedkovia",
    msg_name_short: "Meno poručiteľa je príliš krátke",
    msg_personal_id_shape: "Rodné číslo má mať tvar RRMMDD/XXXX",
    msg_beneficiaries_required: "Musí byť ustanovený aspoň jeden dedič",
    msg_witnesses_minimum: "Vyžadujú sa najmenej dvaja svedkovia",
    clause_capacity: "Vyhlasujem, že som plne spôsobilý(á) na právne úkony a tento závet \
                      robím slobodne, vážne a bez nátlaku.",
    clause_forced_heirs: "Neopominuteľným dedičom (potomkom) patrí povinný podiel z \
                          dedičstva — maloletým celý ich zákonný podiel, plnoletým \
                          polovica.",
};

static EN: Strings = Strings {
    doc_title: "LAST WILL AND TESTAMENT",
    header_text: "Last will and testament under Slovak law",
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
                    {{notary_name}} and is registered in the Notarial Central Register \
                    of Wills.",
    label_testator_name: "Testator's full name",
    label_birth_date: "Date of birth",
    label_address: "Permanent residence",
    label_city: "Place of signing",
    label_beneficiaries: "Heirs",
    label_witnesses: "Witnesses",
    msg_name_short: "Testator name is too short",
    msg_personal_id_shape: "Personal identification number should match RRMMDD/XXXX",
    msg_beneficiaries_required: "At least one heir must be appointed",
    msg_witnesses_minimum: "At least two witnesses are required",
    clause_capacity: "I declare that I have full legal capacity and make this will \
                      freely, seriously, and without duress.",
    clause_forced_heirs: "Forced heirs (descendants) are entitled to a compulsory share \
                          of the estate — minors to their entire statutory share, adults \
                          to one half.",
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

fn rule(check: RuleCheck, message: &str, severity: Severity) -> VariableRule {
    VariableRule {
        check,
        message: message.to_string(),
        severity,
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
            v.rules.push(rule(
                RuleCheck::MinLength { value: 3 },
                s.msg_name_short,
                Severity::Error,
            ));
            v
        },
        var(
            "birth_date",
            s.label_birth_date,
            VariableType::Date,
            true,
            VariableSource::Personal,
        ),
        var(
            "birth_place",
            "Birth place",
            VariableType::Text,
            false,
            VariableSource::Personal,
        ),
        {
            let mut v = var(
                "personal_id",
                "Personal id",
                VariableType::Text,
                false,
                VariableSource::Personal,
            );
            v.rules.push(rule(
                RuleCheck::Pattern {
                    regex: r"^\d{6}/\d{3,4}$".to_string(),
                },
                s.msg_personal_id_shape,
                Severity::Warning,
            ));
            v
        },
        var(
            "address",
            s.label_address,
            VariableType::Text,
            true,
            VariableSource::Personal,
        ),
        var(
            "declaration_city",
            s.label_city,
            VariableType::Text,
            true,
            VariableSource::Personal,
        ),
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
            v.rules.push(rule(
                RuleCheck::MinItems { value: 1 },
                s.msg_beneficiaries_required,
                Severity::Error,
            ));
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
        var(
            "has_executor",
            "Has executor",
            VariableType::Boolean,
            false,
            VariableSource::Executors,
        ),
        var(
            "executor_name",
            "Executor",
            VariableType::Text,
            false,
            VariableSource::Executors,
        ),
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
            v.rules.push(rule(
                RuleCheck::MinItems { value: 2 },
                s.msg_witnesses_minimum,
                Severity::Error,
            ));
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
        section(
            "title",
            s.doc_title,
            s.header_text,
            true,
            0,
            SectionPlacement::Header,
            None,
        ),
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
            legal_basis: "§ 476 Občianskeho zákonníka".to_string(),
            text: s.clause_capacity.to_string(),
        },
        LegalClause {
            id: "forced_heirs_notice".to_string(),
            kind: ClauseKind::Conditional(Predicate {
                variable: "has_protected_heirs".to_string(),
                op: Comparator::IsTrue,
                value: Value::Null,
            }),
            legal_basis: "§ 479 Občianskeho zákonníka".to_string(),
            text: s.clause_forced_heirs.to_string(),
        },
    ]
}

fn execution(language: &LanguageCode, will_type: WillType) -> ExecutionInstructions {
    let slovak = language.as_str() == "sk";
    match will_type {
        WillType::Holographic if slovak => ExecutionInstructions {
            title: "Holografický závet".to_string(),
            steps: [
                "Napíšte celý závet vlastnou rukou",
                "Podpíšte svojím menom a priezviskom",
                "Uveďte dátum a miesto vytvorenia",
                "Uložte na bezpečnom mieste",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Musí byť celý napísaný vlastnou rukou",
                "Musí byť podpísaný",
                "Odporúča sa uviesť dátum",
                "Nepoužívajte písací stroj ani počítač",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Nepísané alebo počítačové časti sú neplatné",
                "Nečitateľné písmo môže spôsobiť problémy",
                "Opravy môžu vzbudiť pochybnosti",
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
        WillType::Witnessed if slovak => ExecutionInstructions {
            title: "Závet pred svedkami".to_string(),
            steps: [
                "Podpíšte závet v prítomnosti dvoch svedkov",
                "Svedkovia musia podpísať súčasne",
                "Vyhlásite, že je to váš závet",
                "Svedkovia potvrdia podpisom",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Dvaja svedkovia musia byť prítomní súčasne",
                "Svedkovia nesmú byť dedičmi ani príbuznými dedičov",
                "Svedkovia musia byť spôsobilí na právne úkony",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Nesprávni svedkovia môžu spôsobiť neplatnosť",
                "Svedkovia musia chápať, čo podpisujú",
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
        WillType::Notarial if slovak => ExecutionInstructions {
            title: "Notársky závet".to_string(),
            steps: [
                "Navštívte notára",
                "Predložte požiadavky na závet",
                "Notár spíše závet podľa vášho prejavu",
                "Podpíšte pred notárom",
            ]
            .map(String::from)
            .to_vec(),
            requirements: [
                "Musí byť spísaný notárom",
                "Podpis pred notárom",
                "Notárska pečať a podpis",
            ]
            .map(String::from)
            .to_vec(),
            warnings: [
                "Najdrahšia forma závetu",
                "Vyžaduje si osobnú prítomnosť",
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

/// Build the Slovak template for the given will type and language, if the
/// language is in the catalog.
pub(super) fn build(will_type: WillType, language: &LanguageCode) -> Option<WillTemplate> {
    let s = strings(language)?;
    let jurisdiction =
        JurisdictionCode::new("SK").expect("BUG: hardcoded jurisdiction code rejected");
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
