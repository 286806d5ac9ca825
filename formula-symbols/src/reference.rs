//! Vocabularies of named references: methods, data items and built-in variables.

symbols! {
    /// Methods that can be called on a data item, e.g. `#{uid}.periodOffset(-1)`.
    pub enum NamedMethod {
        AggregationType = 0 => "aggregationType",
        MaxDate = 1 => "maxDate",
        MinDate = 2 => "minDate",
        PeriodOffset = 3 => "periodOffset",
        StageOffset = 4 => "stageOffset",
        YearToDate = 5 => "yearToDate",
    }
}

symbols! {
    /// Prefix symbol of a data item reference such as `#{uid}` or `OUG{uid}`.
    pub enum DataValue {
        DataElement = 0 => "#",
        Attribute = 1 => "A",
        Constant = 2 => "C",
        ProgramDataElement = 3 => "D",
        ProgramIndicator = 4 => "I",
        Indicator = 5 => "N",
        OrgUnitGroup = 6 => "OUG",
        ReportingRate = 7 => "R",
        ProgramVariable = 8 => "V",
    }
}

symbols! {
    pub enum ReportingRateType {
        ReportingRate = 0 => "REPORTING_RATE",
        ReportingRateOnTime = 1 => "REPORTING_RATE_ON_TIME",
        ActualReports = 2 => "ACTUAL_REPORTS",
        ActualReportsOnTime = 3 => "ACTUAL_REPORTS_ON_TIME",
        ExpectedReports = 4 => "EXPECTED_REPORTS",
    }
}

symbols! {
    /// Built-in program variables, referenced as `V{name}`.
    pub enum ProgramVariable {
        AnalyticsPeriodEnd = 0 => "analytics_period_end",
        AnalyticsPeriodStart = 1 => "analytics_period_start",
        CreationDate = 2 => "creation_date",
        CurrentDate = 3 => "current_date",
        DueDate = 4 => "due_date",
        EnrollmentCount = 5 => "enrollment_count",
        EnrollmentDate = 6 => "enrollment_date",
        EnrollmentId = 7 => "enrollment_id",
        EnrollmentStatus = 8 => "enrollment_status",
        Environment = 9 => "environment",
        EventCount = 10 => "event_count",
        EventDate = 11 => "event_date",
        EventId = 12 => "event_id",
        EventStatus = 13 => "event_status",
        IncidentDate = 14 => "incident_date",
        OrgUnit = 15 => "org_unit",
        OrgUnitCount = 16 => "org_unit_count",
        OrgUnitCode = 17 => "orgunit_code",
        ProgramName = 18 => "program_name",
        ProgramStageId = 19 => "program_stage_id",
        ProgramStageName = 20 => "program_stage_name",
        SyncDate = 21 => "sync_date",
        TeiCount = 22 => "tei_count",
        ValueCount = 23 => "value_count",
        ZeroPosValueCount = 24 => "zero_pos_value_count",
    }
}

symbols! {
    /// Values an indicator expression can refer to by name, e.g. `[days]`.
    pub enum NamedValue {
        Days = 0 => "days",
        PeriodInYear = 1 => "periodInYear",
        YearlyPeriodCount = 2 => "yearlyPeriodCount",
    }
}

symbols! {
    /// Group tags.
    pub enum Tag {
        DataElementGroup = 0 => "deGroup",
        CategoryOptionGroup = 1 => "coGroup",
        OrgUnitGroup = 2 => "ouGroup",
    }
}
